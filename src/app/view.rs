use iced::{Element, Length};
use iced::widget::{Container, Row};
use crate::app::state::{Screen, Tab};
use crate::screens::{homeworks_panel, login_screen, nav_menu, settings_screen, students_panel, teachers_panel, with_dialogs};
use super::{App, Message};

impl App {
    pub fn view(&self) -> Element<Message> {
        let screen: Element<Message> = match self.current_screen {
            Screen::Login => login_screen(self).into(),
            Screen::Console | Screen::Settings => {
                let content = if self.current_screen == Screen::Settings {
                    settings_screen(self)
                } else {
                    match self.active_tab {
                        Tab::Teachers => teachers_panel(self),
                        Tab::Students => students_panel(self),
                        Tab::Homeworks => homeworks_panel(self),
                    }
                };

                Row::new()
                    .spacing(20)
                    .push(
                        // Sidebar: dashboard counters, tabs, settings, logout
                        Container::new(nav_menu(self))
                            .width(Length::Fixed(220.0))
                            .height(Length::Fill)
                            .padding(10),
                    )
                    .push(content.width(Length::Fill))
                    .into()
            }
        };

        with_dialogs(self, screen)
    }
}
