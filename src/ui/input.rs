use crate::ui::app::{App, Focus};
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press to the dialog, the search box, or the table,
/// dialog first so an open form captures everything except quit.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.form_is_open() {
        handle_form_key(app, key);
        return;
    }

    match app.focus() {
        Focus::Search => handle_search_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_form(FormIntent::Close),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::Input(ch))
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.focus_table(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(ch)
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Tab => app.next_tab(),
        KeyCode::Char('/') => app.focus_search(),
        KeyCode::Char('a') => app.open_create_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_form(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('r') => app.refetch(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
            let slot = (ch as u8 - b'1') as usize;
            app.sort_by_slot(slot);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, User};
    use crate::ui::app::EntityTab;
    use crate::ui::events::CollectionCommand;
    use crossterm::event::KeyEventState;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn make_app() -> (
        App,
        mpsc::Receiver<CollectionCommand<Product>>,
        mpsc::Receiver<CollectionCommand<User>>,
    ) {
        let (products_tx, products_rx) = mpsc::channel(8);
        let (users_tx, users_rx) = mpsc::channel(8);
        let app = App::new(
            EntityTab::Products,
            products_tx,
            users_tx,
            Duration::from_secs(60),
        );
        (app, products_rx, users_rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn q_quits_from_the_table() {
        let (mut app, _p, _u) = make_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn q_is_text_inside_the_search_box() {
        let (mut app, _p, _u) = make_app();
        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.products().store().query(), "q");
    }

    #[test]
    fn ctrl_q_quits_everywhere() {
        let (mut app, _p, _u) = make_app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        assert!(app.form_is_open());
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn open_form_captures_table_bindings() {
        let (mut app, mut products_rx, _u) = make_app();
        let _ = products_rx.try_recv(); // startup fetch
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Char('d')));
        // 'd' typed into the form, not a delete.
        assert!(products_rx.try_recv().is_err());
        assert!(app.form_is_open());
    }

    #[test]
    fn escape_leaves_search_then_digit_sorts() {
        let (mut app, _p, _u) = make_app();
        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Esc));
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(
            app.products().store().sort().map(|c| c.field),
            Some("price")
        );
    }

    #[test]
    fn tab_switches_entity() {
        let (mut app, _p, mut users_rx) = make_app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.tab(), EntityTab::Users);
        assert!(matches!(users_rx.try_recv(), Ok(CollectionCommand::Fetch)));
    }
}
