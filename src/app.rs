//! Main application state and egui integration.

use std::sync::Arc;

use crossbeam::channel::Receiver;
use eframe::egui;

use nadlan::accessibility::AccessibilityEngine;
use nadlan::document::DocumentState;
use nadlan::i18n::Localizer;
use nadlan::market::{ApiStatus, MarketEvent, MarketFeed, MarketModel, MarketStats};
use nadlan::prefs::{FilePreferenceStore, PreferenceStore};
use nadlan::ui::screens::{
    AboutScreen, ArticlesScreen, CommissionScreen, ContactScreen, HomeScreen, MarketScreen,
    PropertiesScreen, Screen, ServicesScreen,
};
use nadlan::ui::theme::{self, Theme};
use nadlan::ui::widgets::{language_switch, whatsapp_bubble, AccessibilityWidget, Toasts};

/// Main application state.
pub struct NadlanApp {
    /// Document-level attributes driven by the services
    document: DocumentState,
    /// Localization service
    localizer: Localizer,
    /// Accessibility preference engine
    accessibility: AccessibilityEngine,
    /// Base UI theme (accessibility effects are layered on top)
    theme: Theme,
    /// Current screen
    current_screen: Screen,
    /// Live market data feed (absent when the runtime failed to start)
    market_feed: Option<MarketFeed>,
    /// Feed event receiver
    market_events: Option<Receiver<MarketEvent>>,
    /// Connectivity status for the market screen
    market_status: ApiStatus,
    /// Latest statistics payload
    market_stats: Option<MarketStats>,
    /// Valuation model derived from the latest payload
    market_model: Option<MarketModel>,
    home_screen: HomeScreen,
    properties_screen: PropertiesScreen,
    services_screen: ServicesScreen,
    about_screen: AboutScreen,
    articles_screen: ArticlesScreen,
    contact_screen: ContactScreen,
    commission_screen: CommissionScreen,
    market_screen: MarketScreen,
    accessibility_widget: AccessibilityWidget,
    toasts: Toasts,
}

impl NadlanApp {
    /// Create a new application instance.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let store: Arc<dyn PreferenceStore> = Arc::new(FilePreferenceStore::new());

        let mut document = DocumentState::new();
        let localizer = Localizer::initialize(store.clone());
        localizer.apply_to_document(&mut document);

        let accessibility = AccessibilityEngine::initialize(store, localizer.language());
        accessibility.apply_to_document(&mut document);

        // Follow the system theme initially; the inversion preference is a
        // separate accessibility effect layered on top.
        let theme = match dark_light::detect() {
            dark_light::Mode::Light => Theme::Light,
            _ => Theme::Dark,
        };

        let market_feed = match MarketFeed::spawn() {
            Ok(feed) => Some(feed),
            Err(e) => {
                tracing::warn!("market data feed unavailable: {e}");
                None
            }
        };
        let market_events = market_feed.as_ref().map(|feed| feed.events());

        // Note: Using default egui fonts for now
        // Custom fonts can be configured later if needed

        Self {
            document,
            localizer,
            accessibility,
            theme,
            current_screen: Screen::Home,
            market_feed,
            market_events,
            market_status: ApiStatus::default(),
            market_stats: None,
            market_model: None,
            home_screen: HomeScreen::new(),
            properties_screen: PropertiesScreen::new(),
            services_screen: ServicesScreen::new(),
            about_screen: AboutScreen::new(),
            articles_screen: ArticlesScreen::new(),
            contact_screen: ContactScreen::new(),
            commission_screen: CommissionScreen::new(),
            market_screen: MarketScreen::new(),
            accessibility_widget: AccessibilityWidget::new(),
            toasts: Toasts::new(),
        }
    }

    /// Fold pending feed events into the UI state. The newest payload wins.
    fn drain_market_events(&mut self) {
        let Some(rx) = &self.market_events else {
            return;
        };
        while let Ok(event) = rx.try_recv() {
            self.market_status.apply(&event);
            if let MarketEvent::Updated { stats, .. } = event {
                self.market_model = Some(MarketModel::from_stats(&stats));
                self.market_stats = Some(stats);
            }
        }
    }

    fn header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            let rtl = self.localizer.direction().is_rtl();
            let layout = if rtl {
                egui::Layout::right_to_left(egui::Align::Center)
            } else {
                egui::Layout::left_to_right(egui::Align::Center)
            };
            ui.with_layout(layout, |ui| {
                ui.label(
                    egui::RichText::new(self.localizer.translate("app.title"))
                        .strong()
                        .size(16.0),
                );
                ui.separator();

                for screen in Screen::all() {
                    let selected = self.current_screen == *screen;
                    if ui
                        .selectable_label(selected, self.localizer.translate(screen.title_key()))
                        .clicked()
                    {
                        self.current_screen = *screen;
                    }
                }

                ui.separator();
                if let Some(language) = language_switch(ui, &self.localizer) {
                    self.localizer.set_language(language, &mut self.document);
                }
            });
            ui.add_space(6.0);
        });
    }

    fn footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "© {} · {}",
                        self.localizer.translate("app.tagline"),
                        self.localizer.translate("footer.rights")
                    ))
                    .small()
                    .weak(),
                );
            });
            ui.add_space(4.0);
        });
    }

    fn central(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_width(ui.available_width());
                match self.current_screen {
                    Screen::Home => {
                        if let Some(target) = self.home_screen.show(ui, &self.localizer) {
                            self.current_screen = target;
                        }
                    }
                    Screen::Properties => self.properties_screen.show(ui, &self.localizer),
                    Screen::Services => self.services_screen.show(ui, &self.localizer),
                    Screen::About => self.about_screen.show(ui, &self.localizer),
                    Screen::Articles => self.articles_screen.show(ui, &self.localizer),
                    Screen::Contact => {
                        self.contact_screen
                            .show(ui, &self.localizer, &mut self.toasts)
                    }
                    Screen::Commission => self.commission_screen.show(ui, &self.localizer),
                    Screen::Market => {
                        let refresh_requested = self.market_screen.show(
                            ui,
                            &self.localizer,
                            self.market_model.as_ref(),
                            self.market_stats.as_ref(),
                            &self.market_status,
                        );
                        if refresh_requested {
                            if let Some(feed) = &self.market_feed {
                                feed.request_refresh();
                            }
                        }
                    }
                }
            });
        });
    }
}

impl eframe::App for NadlanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_market_events();

        // Document effects first, so every widget this frame sees them.
        theme::apply_to_context(ctx, self.theme, &self.accessibility.effects());

        self.header(ctx);
        self.footer(ctx);
        self.central(ctx);

        whatsapp_bubble(ctx, &self.localizer);
        self.accessibility_widget.show(
            ctx,
            &self.localizer,
            &mut self.accessibility,
            &mut self.document,
        );
        self.toasts.show(ctx);

        // Feed events arrive off-thread; keep polling at a gentle cadence.
        ctx.request_repaint_after(std::time::Duration::from_millis(500));
    }
}
