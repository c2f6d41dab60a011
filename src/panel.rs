//! Panel visibility and stacking.
//!
//! Each time a panel is shown it takes the next value from a process-wide
//! z-index counter, so the most recently opened panel stacks on top.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::constants::BASE_Z_INDEX;

/// Starts at [`BASE_Z_INDEX`]; the first panel shown gets `BASE_Z_INDEX + 1`.
static Z_INDEX: AtomicU32 = AtomicU32::new(BASE_Z_INDEX);

/// Claim the next stacking order value.
pub fn next_z_index() -> u32 {
    Z_INDEX.fetch_add(1, Ordering::Relaxed) + 1
}

/// Keys the panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKey {
    Space,
    Escape,
    Tab,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    visible: bool,
    inline: bool,
    z_index: u32,
    self_click: bool,
}

impl Panel {
    /// A popup panel, initially hidden.
    pub fn popup() -> Self {
        Self {
            visible: false,
            inline: false,
            z_index: BASE_Z_INDEX,
            self_click: false,
        }
    }

    /// A panel that is always shown and ignores toggling.
    pub fn inline() -> Self {
        Self {
            visible: true,
            inline: true,
            z_index: BASE_Z_INDEX,
            self_click: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    pub fn show(&mut self) {
        if self.inline {
            return;
        }
        self.z_index = next_z_index();
        self.visible = true;
        tracing::debug!(z_index = self.z_index, "panel shown");
    }

    pub fn hide(&mut self) {
        if self.inline {
            return;
        }
        if self.visible {
            tracing::debug!("panel hidden");
        }
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        if self.visible {
            self.hide();
        } else {
            self.show();
        }
    }

    /// React to a key on the picker input. Returns `true` when the key's
    /// default action should be suppressed.
    pub fn handle_key(&mut self, key: PanelKey) -> bool {
        match key {
            PanelKey::Space => {
                self.toggle();
                true
            }
            PanelKey::Escape | PanelKey::Tab => {
                self.hide();
                false
            }
        }
    }

    /// Record that the current click landed on the picker itself.
    pub fn mark_self_click(&mut self) {
        self.self_click = true;
    }

    /// A document-level click. Hides the panel unless the click was marked
    /// as landing on the picker.
    pub fn outside_click(&mut self) {
        if !self.self_click {
            self.hide();
        }
        self.self_click = false;
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::popup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_index_is_monotonic_and_above_base() {
        let a = next_z_index();
        let b = next_z_index();
        assert!(a > BASE_Z_INDEX);
        assert!(b > a);
    }

    #[test]
    fn show_takes_fresh_z_index() {
        let mut first = Panel::popup();
        let mut second = Panel::popup();
        first.show();
        second.show();
        assert!(second.z_index() > first.z_index());
        first.hide();
        first.show();
        assert!(first.z_index() > second.z_index());
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut panel = Panel::popup();
        assert!(!panel.is_visible());
        panel.toggle();
        assert!(panel.is_visible());
        panel.toggle();
        assert!(!panel.is_visible());
    }

    #[test]
    fn space_toggles_and_suppresses_default() {
        let mut panel = Panel::popup();
        assert!(panel.handle_key(PanelKey::Space));
        assert!(panel.is_visible());
        assert!(panel.handle_key(PanelKey::Space));
        assert!(!panel.is_visible());
    }

    #[test]
    fn escape_and_tab_hide() {
        let mut panel = Panel::popup();
        panel.show();
        assert!(!panel.handle_key(PanelKey::Escape));
        assert!(!panel.is_visible());
        panel.show();
        assert!(!panel.handle_key(PanelKey::Tab));
        assert!(!panel.is_visible());
    }

    #[test]
    fn outside_click_hides_unless_self_click() {
        let mut panel = Panel::popup();
        panel.show();
        panel.mark_self_click();
        panel.outside_click();
        assert!(panel.is_visible());
        panel.outside_click();
        assert!(!panel.is_visible());
    }

    #[test]
    fn inline_panel_stays_visible() {
        let mut panel = Panel::inline();
        panel.toggle();
        panel.handle_key(PanelKey::Escape);
        panel.outside_click();
        assert!(panel.is_visible());
        assert!(panel.is_inline());
    }
}
