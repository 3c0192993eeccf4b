/// What the viewport is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayPhase {
    /// No image in the history.
    #[default]
    Empty,
    /// Current image decoded and on screen.
    Loaded,
    /// Current history entry failed to decode.
    DecodeFailed,
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub phase: DisplayPhase,

    /// Pending user-facing error, shown as a modal notification.
    pub error_message: Option<String>,

    /// Action log rendered in the status panel.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn notify_error(&mut self, msg: String) {
        self.add_log(format!("ERROR: {msg}"));
        self.error_message = Some(msg);
    }
}

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Natural image size in pixels, before fit-to-viewport scaling.
    pub image_size: Option<[u32; 2]>,
    /// File name shown in the corner label and window title.
    pub viewing_label: String,
}

impl ViewportState {
    pub fn clear(&mut self) {
        self.texture = None;
        self.image_size = None;
        self.viewing_label.clear();
    }
}
