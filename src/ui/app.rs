use crate::model::{Product, User};
use crate::ui::events::{ApiOutcome, CollectionCommand};
use crate::ui::notify::Notifications;
use crate::ui::pane::Pane;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityTab {
    Products,
    Users,
}

impl EntityTab {
    pub fn title(self) -> &'static str {
        match self {
            EntityTab::Products => "Products",
            EntityTab::Users => "Users",
        }
    }

    pub fn next(self) -> Self {
        match self {
            EntityTab::Products => EntityTab::Users,
            EntityTab::Users => EntityTab::Products,
        }
    }

    pub const ALL: [EntityTab; 2] = [EntityTab::Products, EntityTab::Users];
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Table,
    Search,
}

/// Run a closure against the pane of the active tab. The two panes have
/// different record types, so this match is the one place the tab choice
/// turns into a concrete type.
macro_rules! with_active_pane {
    ($self:expr, $pane:ident => $body:expr) => {
        match $self.tab {
            EntityTab::Products => {
                let $pane = &mut $self.products;
                $body
            }
            EntityTab::Users => {
                let $pane = &mut $self.users;
                $body
            }
        }
    };
}

/// Top-level UI state: both entity panes, the active tab, input focus, and
/// the toast queue.
pub struct App {
    tab: EntityTab,
    focus: Focus,
    products: Pane<Product>,
    users: Pane<User>,
    notifications: Notifications,
    should_quit: bool,
}

impl App {
    pub fn new(
        initial: EntityTab,
        products_commands: mpsc::Sender<CollectionCommand<Product>>,
        users_commands: mpsc::Sender<CollectionCommand<User>>,
        notification_ttl: Duration,
    ) -> Self {
        let mut app = Self {
            tab: initial,
            focus: Focus::Table,
            products: Pane::new(products_commands),
            users: Pane::new(users_commands),
            notifications: Notifications::new(notification_ttl),
            should_quit: false,
        };
        // Opening a tab is a mount: it always triggers one fetch.
        app.activate_tab(initial);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tab(&self) -> EntityTab {
        self.tab
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn focus_table(&mut self) {
        self.focus = Focus::Table;
    }

    pub fn products(&self) -> &Pane<Product> {
        &self.products
    }

    pub fn users(&self) -> &Pane<User> {
        &self.users
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn form_is_open(&self) -> bool {
        match self.tab {
            EntityTab::Products => self.products.form().is_visible(),
            EntityTab::Users => self.users.form().is_visible(),
        }
    }

    pub fn activate_tab(&mut self, tab: EntityTab) {
        self.tab = tab;
        self.focus = Focus::Table;
        with_active_pane!(self, pane => pane.fetch());
    }

    pub fn next_tab(&mut self) {
        self.activate_tab(self.tab.next());
    }

    pub fn refetch(&mut self) {
        with_active_pane!(self, pane => pane.fetch());
    }

    pub fn move_selection(&mut self, delta: i32) {
        with_active_pane!(self, pane => pane.move_selection(delta));
    }

    pub fn sort_by_slot(&mut self, slot: usize) {
        with_active_pane!(self, pane => pane.sort_by_slot(slot));
    }

    pub fn push_search_char(&mut self, ch: char) {
        with_active_pane!(self, pane => pane.push_search_char(ch));
    }

    pub fn pop_search_char(&mut self) {
        with_active_pane!(self, pane => pane.pop_search_char());
    }

    pub fn open_create_form(&mut self) {
        with_active_pane!(self, pane => pane.open_create_form());
    }

    pub fn open_edit_form(&mut self) {
        with_active_pane!(self, pane => pane.open_edit_form());
    }

    pub fn dispatch_form(&mut self, intent: crate::ui::form::FormIntent) {
        with_active_pane!(self, pane => pane.dispatch_form(intent));
    }

    pub fn submit_form(&mut self) {
        with_active_pane!(self, pane => pane.submit_form());
    }

    pub fn delete_selected(&mut self) {
        with_active_pane!(self, pane => pane.delete_selected());
    }

    /// Route a settled request to the pane the outcome belongs to, whether
    /// or not that tab is active.
    pub fn on_api(&mut self, outcome: ApiOutcome) {
        match outcome {
            ApiOutcome::Products(outcome) => {
                self.products.on_outcome(outcome, &mut self.notifications)
            }
            ApiOutcome::Users(outcome) => self.users.on_outcome(outcome, &mut self.notifications),
        }
    }

    pub fn on_tick(&mut self) {
        self.notifications.prune();
    }
}
