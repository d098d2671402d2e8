//! Articles screen: excerpts expanding into the full text.

use egui::{RichText, Ui};
use uuid::Uuid;

use crate::catalog::{fixtures, ArticlePost};
use crate::i18n::{Language, Localizer};

/// Articles screen state.
#[derive(Default)]
pub struct ArticlesScreen {
    language: Option<Language>,
    articles: Vec<ArticlePost>,
    expanded: Option<Uuid>,
}

impl ArticlesScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_data(&mut self, language: Language) {
        if self.language != Some(language) {
            let mut articles = fixtures::articles(language);
            articles.retain(|a| a.published);
            self.articles = articles;
            self.language = Some(language);
            self.expanded = None;
        }
    }

    pub fn show(&mut self, ui: &mut Ui, localizer: &Localizer) {
        self.ensure_data(localizer.language());

        ui.label(
            RichText::new(localizer.translate("articles.title"))
                .strong()
                .size(24.0),
        );
        ui.label(RichText::new(localizer.translate("articles.subtitle")).weak());
        ui.add_space(12.0);

        for article in &self.articles {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&article.title).strong().size(16.0));
                ui.label(
                    RichText::new(format!(
                        "{} {} · {}: {}",
                        localizer.translate("articles.by"),
                        article.author,
                        localizer.translate("articles.category"),
                        article.category
                    ))
                    .small()
                    .weak(),
                );
                ui.add_space(4.0);

                if self.expanded == Some(article.id) {
                    ui.label(&article.content);
                } else {
                    ui.label(&article.excerpt);
                    if ui.link(localizer.translate("articles.read_more")).clicked() {
                        self.expanded = Some(article.id);
                    }
                }
            });
            ui.add_space(8.0);
        }
    }
}
