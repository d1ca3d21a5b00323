use log::{info, warn};
use yew::Callback;

use crate::config;

/// Licensing tiers sold through the external checkout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offer {
    Individual,
    Clinic,
    School,
}

impl Offer {
    fn query(self) -> (&'static str, &'static str) {
        match self {
            Offer::Individual => ("bid", config::INDIVIDUAL_BID),
            Offer::Clinic => ("off", config::CLINIC_OFFER),
            Offer::School => ("off", config::SCHOOL_OFFER),
        }
    }
}

/// Places a button can send the whole tab to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Login,
    Checkout(Offer),
    WhatsApp,
}

impl Destination {
    pub fn url(self) -> String {
        match self {
            Destination::Login => config::LOGIN_URL.to_string(),
            Destination::Checkout(offer) => {
                let (key, value) = offer.query();
                format!("{}?{}={}", config::CHECKOUT_URL, key, value)
            }
            Destination::WhatsApp => format!(
                "https://wa.me/{}?text={}",
                config::WHATSAPP_RECIPIENT,
                urlencoding::encode(config::WHATSAPP_MESSAGE)
            ),
        }
    }
}

/// Fire-and-forget: leaves the app, nothing is reported back.
pub fn redirect(destination: Destination) {
    info!("Redirecting to {:?}", destination);
    let Some(window) = web_sys::window() else {
        warn!("No window available to redirect to {:?}", destination);
        return;
    };
    if let Err(e) = window.location().set_href(&destination.url()) {
        warn!("Redirect to {:?} failed: {:?}", destination, e);
    }
}

pub fn redirect_to<E: 'static>(destination: Destination) -> Callback<E> {
    Callback::from(move |_| redirect(destination))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_goes_to_the_portal() {
        assert_eq!(Destination::Login.url(), "https://neurorastreio.online");
    }

    #[test]
    fn each_offer_has_its_own_checkout_query() {
        assert_eq!(
            Destination::Checkout(Offer::Individual).url(),
            "https://pay.hotmart.com/B103531427J?bid=1766784240831"
        );
        assert_eq!(
            Destination::Checkout(Offer::Clinic).url(),
            "https://pay.hotmart.com/B103531427J?off=jmcura9r"
        );
        assert_eq!(
            Destination::Checkout(Offer::School).url(),
            "https://pay.hotmart.com/B103531427J?off=o92wvqkm"
        );
    }

    #[test]
    fn whatsapp_message_is_url_encoded() {
        let url = Destination::WhatsApp.url();
        assert!(url.starts_with("https://wa.me/5511992367278?text="));
        let text = url.split_once("?text=").map(|(_, t)| t).unwrap_or_default();
        assert!(!text.contains(' '));
        assert!(text.starts_with("Ol%C3%A1%2C%20estou"));
        assert_eq!(urlencoding::decode(text).unwrap(), config::WHATSAPP_MESSAGE);
    }
}
