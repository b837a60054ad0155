use iced::{widget::{column, text, text_input, button, vertical_space, Container}, Length, Center};
use crate::app::{App, Message};

pub fn login_screen(app: &App) -> Container<Message> {
    let content = column![
        text("作业管理系统 · 管理员登录").size(30),
        vertical_space(),
        text_input("服务器地址", &app.server_url)
            .on_input(Message::ServerUrlChanged)
            .padding(10)
            .size(18)
            .width(Length::Fixed(350.0)),
        text_input("用户名", &app.login_username)
            .on_input(Message::UsernameChanged)
            .on_submit(Message::LoginPressed)
            .padding(10)
            .size(18)
            .width(Length::Fixed(350.0)),
        text_input("密码", &app.login_password)
            .on_input(Message::PasswordChanged)
            .on_submit(Message::LoginPressed)
            .secure(true)
            .padding(10)
            .size(18)
            .width(Length::Fixed(350.0)),
        button("登录")
            .on_press(Message::LoginPressed)
            .padding(10),
        text(app.login_error.as_deref().unwrap_or_default()).size(18),
        vertical_space(),
    ]
        .spacing(15)
        .width(Length::Fill)
        .align_x(Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
