use rand::Rng;

use crate::core::generator::random_price;
use crate::models::DomainCheck;

pub const REGISTRAR: &str = "FindMyBizName Registry";

const CHECK_PRICE_CENTS_RANGE: (u32, u32) = (1200, 4199);

/// Fabricate a registry answer for `domain`
///
/// There is no registry behind this; availability is a fair coin.
pub fn check_domain<R: Rng + ?Sized>(domain: &str, rng: &mut R) -> DomainCheck {
    DomainCheck {
        domain: domain.to_string(),
        available: rng.gen_bool(0.5),
        price: random_price(rng, CHECK_PRICE_CENTS_RANGE),
        registrar: REGISTRAR.to_string(),
    }
}
