//! Live market valuation screen.
//!
//! Renders the connectivity status, the appraisal form, the valuation
//! results, and the price-history plot. All figures come from the live
//! statistics feed; without data the calculator refuses to guess.

use chrono::{DateTime, Datelike, Utc};
use egui::{Color32, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::i18n::Localizer;
use crate::market::types::series;
use crate::market::{
    ApiStatus, Condition, MarketModel, MarketStats, Region, ResidenceType, Valuation,
    ValuationError, ValuationRequest,
};
use crate::ui::{format_currency, format_number};

const CONNECTED_GREEN: Color32 = Color32::from_rgb(52, 168, 83);
const DISCONNECTED_RED: Color32 = Color32::from_rgb(234, 67, 53);

/// Market screen state.
pub struct MarketScreen {
    region: Region,
    residence_type: ResidenceType,
    condition: Condition,
    size_input: String,
    rooms_input: String,
    floor_input: String,
    parking_input: String,
    year_built_input: String,
    show_advanced: bool,
    valuation: Option<Valuation>,
    valuation_error: Option<ValuationError>,
}

impl Default for MarketScreen {
    fn default() -> Self {
        Self {
            region: Region::TelAviv,
            residence_type: ResidenceType::ApartmentBuilding,
            condition: Condition::New,
            size_input: String::new(),
            rooms_input: String::new(),
            floor_input: String::new(),
            parking_input: "0".to_string(),
            year_built_input: "2020".to_string(),
            show_advanced: false,
            valuation: None,
            valuation_error: None,
        }
    }
}

impl MarketScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the screen; returns true when the user asked for a refresh.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        localizer: &Localizer,
        model: Option<&MarketModel>,
        stats: Option<&MarketStats>,
        status: &ApiStatus,
    ) -> bool {
        let mut refresh_requested = false;

        ui.label(
            RichText::new(localizer.translate("market.title"))
                .strong()
                .size(24.0),
        );
        ui.label(RichText::new(localizer.translate("market.subtitle")).weak());
        ui.add_space(8.0);

        refresh_requested |= self.status_panel(ui, localizer, model, status);
        ui.add_space(12.0);

        ui.columns(2, |columns| {
            self.form_column(&mut columns[0], localizer, model, status);
            self.results_column(&mut columns[1], localizer, model, stats);
        });

        ui.add_space(12.0);
        ui.label(RichText::new(localizer.translate("market.disclaimer")).small().weak());

        refresh_requested
    }

    fn status_panel(
        &mut self,
        ui: &mut Ui,
        localizer: &Localizer,
        model: Option<&MarketModel>,
        status: &ApiStatus,
    ) -> bool {
        let mut refresh_requested = false;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let refresh_label = if status.loading {
                    localizer.translate("market.refreshing")
                } else {
                    localizer.translate("market.refresh")
                };
                if ui
                    .add_enabled(!status.loading, egui::Button::new(format!("⟳ {refresh_label}")))
                    .clicked()
                {
                    refresh_requested = true;
                }

                let (icon, color, key) = if status.connected {
                    ("●", CONNECTED_GREEN, "market.connected")
                } else {
                    ("●", DISCONNECTED_RED, "market.disconnected")
                };
                ui.label(RichText::new(icon).color(color));
                ui.label(RichText::new(localizer.translate(key)).color(color));

                if let Some(at) = status.last_update {
                    ui.separator();
                    ui.label(format!(
                        "{}: {}",
                        localizer.translate("market.last_update"),
                        format_time(at)
                    ));
                }
            });

            if let Some(error) = &status.error {
                ui.label(RichText::new(error).color(DISCONNECTED_RED).small());
            }

            if let Some(model) = model {
                let overview = model.overview();
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    overview_stat(
                        ui,
                        &localizer.translate("market.avg_sell"),
                        &format_currency(overview.avg_sell_price),
                    );
                    ui.separator();
                    overview_stat(
                        ui,
                        &localizer.translate("market.avg_rent"),
                        &format_currency(overview.avg_rent_price),
                    );
                    ui.separator();
                    overview_stat(
                        ui,
                        &localizer.translate("market.total_properties"),
                        &format_number(overview.total_properties as f64),
                    );
                });
            }
        });

        refresh_requested
    }

    fn form_column(
        &mut self,
        ui: &mut Ui,
        localizer: &Localizer,
        model: Option<&MarketModel>,
        status: &ApiStatus,
    ) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(localizer.translate("market.property_details"))
                    .strong()
                    .size(16.0),
            );
            ui.add_space(6.0);

            ui.label(localizer.translate("market.region"));
            ui.horizontal_wrapped(|ui| {
                for region in Region::all() {
                    let mut label = localizer.translate(region.label_key());
                    if let Some(model) = model {
                        let snapshot = model.region(*region);
                        if snapshot.price_per_sqm > 0.0 {
                            label = format!(
                                "{label} ({}/{})",
                                format_currency(snapshot.price_per_sqm),
                                localizer.translate("properties.sqm")
                            );
                        }
                    }
                    if ui
                        .selectable_label(self.region == *region, label)
                        .clicked()
                    {
                        self.region = *region;
                    }
                }
            });
            ui.add_space(6.0);

            ui.label(localizer.translate("market.property_type"));
            ui.horizontal_wrapped(|ui| {
                for kind in ResidenceType::all() {
                    if ui
                        .selectable_label(
                            self.residence_type == *kind,
                            localizer.translate(kind.label_key()),
                        )
                        .clicked()
                    {
                        self.residence_type = *kind;
                    }
                }
            });
            ui.add_space(6.0);

            ui.label(localizer.translate("market.size"));
            ui.add(
                egui::TextEdit::singleline(&mut self.size_input)
                    .hint_text(localizer.translate("market.size_placeholder")),
            );

            ui.label(localizer.translate("market.rooms"));
            ui.text_edit_singleline(&mut self.rooms_input);

            ui.label(localizer.translate("market.condition"));
            ui.horizontal_wrapped(|ui| {
                for condition in Condition::all() {
                    if ui
                        .selectable_label(
                            self.condition == *condition,
                            localizer.translate(condition.label_key()),
                        )
                        .clicked()
                    {
                        self.condition = *condition;
                    }
                }
            });

            let advanced_key = if self.show_advanced {
                "market.advanced_hide"
            } else {
                "market.advanced_show"
            };
            if ui.link(localizer.translate(advanced_key)).clicked() {
                self.show_advanced = !self.show_advanced;
            }

            if self.show_advanced {
                ui.label(localizer.translate("market.floor"));
                ui.text_edit_singleline(&mut self.floor_input);
                ui.label(localizer.translate("market.parking"));
                ui.text_edit_singleline(&mut self.parking_input);
                ui.label(localizer.translate("market.year_built"));
                ui.text_edit_singleline(&mut self.year_built_input);
            }

            ui.add_space(10.0);
            let has_data = model.is_some_and(|m| m.has_data());
            let button_key = if status.loading {
                "market.loading"
            } else {
                "market.calculate"
            };
            let clicked = ui
                .add_enabled(
                    has_data && !status.loading,
                    egui::Button::new(RichText::new(localizer.translate(button_key)).size(15.0)),
                )
                .clicked();

            if !has_data && !status.loading {
                ui.label(
                    RichText::new(localizer.translate("market.no_data"))
                        .color(DISCONNECTED_RED)
                        .small(),
                );
            }

            if clicked {
                self.run_appraisal(model);
            }
        });
    }

    fn run_appraisal(&mut self, model: Option<&MarketModel>) {
        let Some(model) = model else {
            self.valuation = None;
            self.valuation_error = Some(ValuationError::NoMarketData);
            return;
        };

        let request = ValuationRequest {
            region: self.region,
            residence_type: self.residence_type,
            condition: self.condition,
            size_sqm: self.size_input.trim().parse().unwrap_or(0.0),
            rooms: self.rooms_input.trim().parse().ok(),
            floor: self.floor_input.trim().parse().ok(),
            parking_spots: self.parking_input.trim().parse().unwrap_or(0),
            year_built: self.year_built_input.trim().parse().unwrap_or(2020),
        };

        match model.appraise(&request, Utc::now().year()) {
            Ok(valuation) => {
                self.valuation = Some(valuation);
                self.valuation_error = None;
            }
            Err(e) => {
                self.valuation = None;
                self.valuation_error = Some(e);
            }
        }
    }

    fn results_column(
        &mut self,
        ui: &mut Ui,
        localizer: &Localizer,
        model: Option<&MarketModel>,
        stats: Option<&MarketStats>,
    ) {
        if let Some(error) = self.valuation_error {
            ui.label(
                RichText::new(localizer.translate(error.message_key()))
                    .color(DISCONNECTED_RED),
            );
            ui.add_space(6.0);
        }

        if let Some(valuation) = self.valuation {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(localizer.translate("market.valuation"))
                        .strong()
                        .size(16.0),
                );
                ui.label(RichText::new(localizer.translate("market.current_value")).weak());
                ui.label(
                    RichText::new(format_currency(valuation.current_value))
                        .strong()
                        .size(26.0)
                        .color(CONNECTED_GREEN),
                );
                ui.label(format!(
                    "{} {}",
                    format_currency(valuation.price_per_sqm),
                    localizer.translate("market.per_sqm")
                ));
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    overview_stat(
                        ui,
                        &localizer.translate("market.monthly_rent"),
                        &format_currency(valuation.monthly_rent),
                    );
                    ui.separator();
                    overview_stat(
                        ui,
                        &localizer.translate("market.rent_yield"),
                        &format!("{:.2}%", valuation.rent_yield_pct),
                    );
                });
            });
            ui.add_space(8.0);

            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(localizer.translate("market.analysis"))
                        .strong()
                        .size(16.0),
                );
                ui.label(RichText::new(localizer.translate("market.value_5y")).weak());
                ui.label(
                    RichText::new(format_currency(valuation.value_in_5_years))
                        .strong()
                        .size(20.0),
                );
                ui.label(format!(
                    "{}: {}%",
                    localizer.translate("market.growth"),
                    valuation.expected_growth_pct
                ));
                ui.add_space(4.0);
                row(
                    ui,
                    &localizer.translate("market.occupancy"),
                    &format!("{}%", valuation.occupancy_pct),
                );
                row(
                    ui,
                    &localizer.translate("market.market_share"),
                    &format!("{}%", valuation.market_share_pct),
                );
                row(
                    ui,
                    &localizer.translate("market.region_growth"),
                    &format!("{:+}%", valuation.expected_growth_pct),
                );
            });
            ui.add_space(8.0);
        }

        if let Some(stats) = stats {
            if let Some(histogram) = stats.series(series::SELL_PRICE) {
                if !histogram.histogram_points.is_empty() {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            RichText::new(localizer.translate("market.history"))
                                .strong()
                                .size(16.0),
                        );
                        let coords: Vec<[f64; 2]> = histogram
                            .histogram_points
                            .iter()
                            .map(|p| [p.epoch_time as f64, p.value])
                            .collect();
                        Plot::new("sell-price-history")
                            .height(160.0)
                            .show_axes([false, true])
                            .show(ui, |plot_ui| {
                                plot_ui.line(Line::new("sell_price", PlotPoints::new(coords)));
                            });
                    });
                }
            }
        }

        if self.valuation.is_none() && model.is_none() {
            ui.label(RichText::new(localizer.translate("market.loading")).weak());
        }
    }
}

fn overview_stat(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value).strong());
    });
}

fn row(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value).strong());
        });
    });
}

fn format_time(at: DateTime<Utc>) -> String {
    at.format("%d/%m %H:%M").to_string()
}
