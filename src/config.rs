use log::Level;

pub const LOGIN_URL: &str = "https://neurorastreio.online";

pub const CHECKOUT_URL: &str = "https://pay.hotmart.com/B103531427J";
pub const INDIVIDUAL_BID: &str = "1766784240831";
pub const CLINIC_OFFER: &str = "jmcura9r";
pub const SCHOOL_OFFER: &str = "o92wvqkm";

pub const WHATSAPP_RECIPIENT: &str = "5511992367278";
pub const WHATSAPP_MESSAGE: &str =
    "Olá, estou vindo do site NeuroRastreio Motor e gostaria de saber mais sobre a plataforma";

pub const DEMO_VIDEO_URL: &str = "https://www.youtube.com/embed/NEOnApF0Ow8";
pub const DEMO_VIDEO_TITLE: &str = "Apresentação NeuroRastreio Motor";
pub const DEMO_VIDEO_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

pub const DEVELOPER_URL: &str = "https://psiform.com.br";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
