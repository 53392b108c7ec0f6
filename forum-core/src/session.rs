use std::cell::RefCell;
use std::rc::Rc;

use crate::models::User;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Состояние сессии на стороне клиента.
pub enum SessionState {
    /// Пользователь не вошёл.
    #[default]
    LoggedOut,
    /// Пользователь вошёл; данные такие, какими их вернул сервер.
    LoggedIn(User),
}

impl SessionState {
    /// Текущий пользователь, если есть.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::LoggedIn(user) => Some(user),
            Self::LoggedOut => None,
        }
    }

    /// `true`, если пользователь вошёл.
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }
}

#[derive(Debug, Clone, Default)]
/// Разделяемый дескриптор сессии.
///
/// Клоны указывают на одно и то же состояние. Читать может кто угодно,
/// менять может только контроллер [`crate::Forum`].
pub struct Session {
    state: Rc<RefCell<SessionState>>,
}

impl Session {
    /// Создаёт сессию в состоянии [`SessionState::LoggedOut`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Снимок текущего состояния.
    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Текущий пользователь, если есть.
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user().cloned()
    }

    /// `true`, если пользователь вошёл.
    pub fn is_logged_in(&self) -> bool {
        self.state.borrow().is_logged_in()
    }

    pub(crate) fn sign_in(&self, user: User) {
        *self.state.borrow_mut() = SessionState::LoggedIn(user);
    }

    pub(crate) fn sign_out(&self) {
        *self.state.borrow_mut() = SessionState::LoggedOut;
    }
}
