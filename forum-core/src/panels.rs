#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Панель с формой.
pub enum Panel {
    /// Форма входа.
    Login,
    /// Форма регистрации.
    Register,
    /// Форма создания поста.
    CreatePost,
}

impl Panel {
    /// Все панели.
    pub const ALL: [Panel; 3] = [Panel::Login, Panel::Register, Panel::CreatePost];

    /// `id` DOM-элемента панели.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Login => "loginForm",
            Self::Register => "registerForm",
            Self::CreatePost => "createPostForm",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Взаимоисключающая видимость панелей: видна не более чем одна.
pub struct Panels {
    visible: Option<Panel>,
}

impl Panels {
    /// Показывает `panel`, остальные скрывает.
    pub fn show(&mut self, panel: Panel) {
        self.visible = Some(panel);
    }

    /// Скрывает все панели.
    pub fn hide_all(&mut self) {
        self.visible = None;
    }

    /// Видимая панель, если есть.
    pub fn visible(&self) -> Option<Panel> {
        self.visible
    }

    /// `true`, если `panel` сейчас видна.
    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible == Some(panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initially_all_hidden() {
        let panels = Panels::default();
        assert!(Panel::ALL.iter().all(|panel| !panels.is_visible(*panel)));
    }

    #[test]
    fn show_leaves_exactly_one_visible() {
        let mut panels = Panels::default();
        for first in Panel::ALL {
            for second in Panel::ALL {
                panels.show(first);
                panels.show(second);

                let visible: Vec<_> = Panel::ALL
                    .into_iter()
                    .filter(|panel| panels.is_visible(*panel))
                    .collect();
                assert_eq!(visible, vec![second]);
            }
        }
    }

    #[test]
    fn hide_all_clears_visibility() {
        let mut panels = Panels::default();
        panels.show(Panel::Register);
        panels.hide_all();
        assert_eq!(panels.visible(), None);
    }
}
