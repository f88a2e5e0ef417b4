use risktui::action::Action;
use risktui::config::{parse_key_sequence, Config};
use risktui::mode::Mode;
use risktui::model::tabs::{PanelTab, ViewTab};

/// Resolve a key sequence against the default bindings for a mode, the way
/// the app loop does.
fn action_for(config: &Config, mode: Mode, keys: &str) -> Option<Action> {
    let sequence = parse_key_sequence(keys).expect("valid key sequence");
    config
        .keybindings
        .get(&mode)
        .and_then(|keymap| keymap.get(&sequence))
        .cloned()
}

#[test]
fn test_quit_works_in_both_modes() {
    let config = Config::new().expect("config");
    for mode in [Mode::Visualization, Mode::Notebook] {
        assert_eq!(action_for(&config, mode, "<q>"), Some(Action::Quit));
        assert_eq!(action_for(&config, mode, "<ctrl-c>"), Some(Action::Quit));
        assert_eq!(action_for(&config, mode, "<ctrl-d>"), Some(Action::Quit));
        assert_eq!(action_for(&config, mode, "<ctrl-z>"), Some(Action::Suspend));
    }
}

#[test]
fn test_tab_switches_view_in_both_modes() {
    let config = Config::new().expect("config");
    for mode in [Mode::Visualization, Mode::Notebook] {
        assert_eq!(action_for(&config, mode, "<tab>"), Some(Action::NextView));
        assert_eq!(
            action_for(&config, mode, "<backtab>"),
            Some(Action::NextView)
        );
    }
}

#[test]
fn test_visualization_panel_bindings() {
    let config = Config::new().expect("config");
    let mode = Mode::Visualization;

    assert_eq!(action_for(&config, mode, "<l>"), Some(Action::NextPanel));
    assert_eq!(
        action_for(&config, mode, "<h>"),
        Some(Action::PreviousPanel)
    );
    assert_eq!(
        action_for(&config, mode, "<1>"),
        Some(Action::SelectPanel(PanelTab::Overview))
    );
    assert_eq!(
        action_for(&config, mode, "<2>"),
        Some(Action::SelectPanel(PanelTab::Performance))
    );
    assert_eq!(
        action_for(&config, mode, "<3>"),
        Some(Action::SelectPanel(PanelTab::Features))
    );
    assert_eq!(
        action_for(&config, mode, "<4>"),
        Some(Action::SelectPanel(PanelTab::Thresholds))
    );
    assert_eq!(
        action_for(&config, mode, "<n>"),
        Some(Action::SelectView(ViewTab::Notebook))
    );

    // scroll keys belong to the notebook mode only
    assert_eq!(action_for(&config, mode, "<j>"), None);
}

#[test]
fn test_notebook_scroll_bindings() {
    let config = Config::new().expect("config");
    let mode = Mode::Notebook;

    assert_eq!(action_for(&config, mode, "<j>"), Some(Action::ScrollDown));
    assert_eq!(action_for(&config, mode, "<k>"), Some(Action::ScrollUp));
    assert_eq!(
        action_for(&config, mode, "<down>"),
        Some(Action::ScrollDown)
    );
    assert_eq!(action_for(&config, mode, "<up>"), Some(Action::ScrollUp));
    assert_eq!(
        action_for(&config, mode, "<shift-g>"),
        Some(Action::ScrollToBottom)
    );
    assert_eq!(
        action_for(&config, mode, "<v>"),
        Some(Action::SelectView(ViewTab::Visualization))
    );

    // panel keys belong to the visualization mode only
    assert_eq!(action_for(&config, mode, "<1>"), None);
}

#[test]
fn test_multi_key_sequence_scrolls_to_top() {
    let config = Config::new().expect("config");

    let sequence = parse_key_sequence("<g><g>").expect("valid key sequence");
    assert_eq!(sequence.len(), 2);
    assert_eq!(
        action_for(&config, Mode::Notebook, "<g><g>"),
        Some(Action::ScrollToTop)
    );

    // a single g is not bound, leaving room for the second keypress
    assert_eq!(action_for(&config, Mode::Notebook, "<g>"), None);
}
