use iced::{widget::{column, text, Container, vertical_space}, Length, Center, Theme};
use iced::widget::{button, pick_list};
use crate::app::{App, Message};
use crate::config::{theme_to_str, CONFIG_FILE};

pub fn settings_screen(app: &App) -> Container<Message> {
    let current_name = theme_to_str(&app.theme);
    let theme_names: Vec<&'static str> = Theme::ALL.iter().map(theme_to_str).collect();
    let content = column![
        text("设置").size(30),
        vertical_space(),
        text("主题"),
        pick_list(theme_names, Some(current_name), Message::ThemeSelected)
            .placeholder("选择主题"),
        text(format!("服务器: {}", app.api.base_url())),
        text(format!("设置保存在 {}", CONFIG_FILE)).size(14),
        button("返回").style(button::secondary).on_press(Message::GoToConsole),
        vertical_space(),
    ]
        .spacing(15)
        .align_x(Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
