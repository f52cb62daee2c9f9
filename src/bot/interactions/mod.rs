pub mod panel_buttons;
