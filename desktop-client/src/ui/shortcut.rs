use common::log;

/// Ctrl+Z undo binding. Only a live `UndoShortcut` reacts to the key, and
/// the binding is released when it is dropped.
pub struct UndoShortcut {
    _private: (),
}

impl UndoShortcut {
    pub fn register() -> Self {
        log!("Undo shortcut (Ctrl+Z) registered");
        Self { _private: () }
    }

    pub fn pressed(&self, ctx: &egui::Context) -> bool {
        ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Z))
    }
}

impl Drop for UndoShortcut {
    fn drop(&mut self) {
        log!("Undo shortcut (Ctrl+Z) released");
    }
}
