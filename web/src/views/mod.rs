mod chat;
mod chat_page;
mod home;
mod intro;

pub use chat::ChatView;
pub use chat_page::ChatPage;
pub use home::Home;
pub use intro::IntroView;
