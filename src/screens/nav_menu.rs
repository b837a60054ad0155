use iced::{widget::{button, column}, Alignment, Element, Length, Renderer, Theme};
use iced::widget::container::bordered_box;
use iced::widget::{text, vertical_space, Column, Container, Row};
use iced_font_awesome::fa_icon_solid;
use crate::app::state::{Screen, Tab};
use crate::app::{App, Message};

fn icon_button_content<'a>(
    icon_element: impl Into<Element<'a, Message, Theme, Renderer>>,
    label: String,
) -> Row<'a, Message> {
    Row::new()
        .align_y(Alignment::Center)
        .spacing(5)
        .push(icon_element)
        .push(text(label))
}

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Teachers => "chalkboard-user",
        Tab::Students => "user-graduate",
        Tab::Homeworks => "book",
    }
}

fn counter<'a>(label: &'a str, value: Option<usize>) -> Row<'a, Message> {
    Row::new()
        .push(text(label).width(Length::Fill))
        .push(text(value.map_or_else(|| "-".to_string(), |v| v.to_string())).size(18))
        .align_y(Alignment::Center)
}

pub fn nav_menu(app: &App) -> Container<Message> {
    let stats = app.stats;
    let dashboard = Container::new(
        Column::new()
            .spacing(6)
            .push(text(app.admin_name.as_deref().unwrap_or("管理员")).size(20))
            .push(counter("教师总数", stats.map(|s| s.teachers)))
            .push(counter("学生总数", stats.map(|s| s.students)))
            .push(counter("作业总数", stats.map(|s| s.homeworks))),
    )
    .padding(10)
    .width(Length::Fill)
    .style(bordered_box);

    let mut tabs = Column::new().spacing(10);
    for tab in Tab::ALL {
        let active = app.current_screen == Screen::Console && app.active_tab == tab;
        tabs = tabs.push(
            button(icon_button_content(
                fa_icon_solid(tab_icon(tab)).style(move |_| text::base(&app.theme)),
                tab.to_string(),
            ))
            .style(if active { button::primary } else { button::secondary })
            .on_press(Message::TabSelected(tab))
            .width(Length::Fill),
        );
    }

    let content = column![
        dashboard,
        tabs,
        vertical_space(),
        button(icon_button_content(
            fa_icon_solid("gear").style(move |_| text::base(&app.theme)),
            "设置".to_string(),
        ))
        .style(button::secondary)
        .on_press(Message::GoToSettings)
        .width(Length::Fill),
        button(icon_button_content(
            fa_icon_solid("arrow-right-from-bracket").style(move |_| text::base(&app.theme)),
            "退出登录".to_string(),
        ))
        .style(button::danger)
        .on_press(Message::Logout)
        .width(Length::Fill),
    ]
    .spacing(15);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10)
}
