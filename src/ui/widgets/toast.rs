//! Transient toast notifications.

use egui::{Align2, Area, Color32, Context, Frame, RichText};

const TOAST_SECONDS: f64 = 4.0;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

struct Toast {
    title: String,
    description: String,
    kind: ToastKind,
    expires_at: f64,
}

/// Stack of transient notifications drawn over the top of the viewport.
#[derive(Default)]
pub struct Toasts {
    entries: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a success toast.
    pub fn success(&mut self, ctx: &Context, title: impl Into<String>, description: impl Into<String>) {
        self.push(ctx, ToastKind::Success, title, description);
    }

    /// Queue an error toast.
    pub fn error(&mut self, ctx: &Context, title: impl Into<String>, description: impl Into<String>) {
        self.push(ctx, ToastKind::Error, title, description);
    }

    fn push(
        &mut self,
        ctx: &Context,
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) {
        let now = ctx.input(|i| i.time);
        self.entries.push(Toast {
            title: title.into(),
            description: description.into(),
            kind,
            expires_at: now + TOAST_SECONDS,
        });
    }

    /// Draw live toasts and drop the expired ones.
    pub fn show(&mut self, ctx: &Context) {
        let now = ctx.input(|i| i.time);
        self.entries.retain(|t| t.expires_at > now);
        if self.entries.is_empty() {
            return;
        }

        Area::new(egui::Id::new("toast-stack"))
            .anchor(Align2::CENTER_TOP, [0.0, 16.0])
            .show(ctx, |ui| {
                for toast in &self.entries {
                    let accent = match toast.kind {
                        ToastKind::Success => Color32::from_rgb(52, 168, 83),
                        ToastKind::Error => Color32::from_rgb(234, 67, 53),
                    };
                    Frame::window(ui.style())
                        .stroke(egui::Stroke::new(1.5, accent))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&toast.title).strong().color(accent));
                            if !toast.description.is_empty() {
                                ui.label(&toast.description);
                            }
                        });
                    ui.add_space(6.0);
                }
            });

        // Keep repainting while toasts are on screen so they expire on time.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
