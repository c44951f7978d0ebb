use axum::response::Response;
use serde_json::Value;

use crate::matching::domain::{Couple, Person};
use crate::matching::tables::{Nakshatra, ZodiacSign};
use crate::matching::validation::{CompatibilityRequest, PersonInput};
use crate::matching::AshtaKootaEngine;

pub(super) fn couple(
    bride_sign: ZodiacSign,
    bride_nakshatra: Nakshatra,
    groom_sign: ZodiacSign,
    groom_nakshatra: Nakshatra,
) -> Couple {
    Couple::new(
        Person::new(bride_sign, bride_nakshatra),
        Person::new(groom_sign, groom_nakshatra),
    )
}

/// Couple where only the signs matter to the rule under test.
pub(super) fn signs(bride: ZodiacSign, groom: ZodiacSign) -> Couple {
    couple(bride, Nakshatra::Ashwini, groom, Nakshatra::Ashwini)
}

/// Couple where only the nakshatras matter to the rule under test.
pub(super) fn nakshatras(bride: Nakshatra, groom: Nakshatra) -> Couple {
    couple(ZodiacSign::Aries, bride, ZodiacSign::Aries, groom)
}

/// Bride Cancer/Rohini, groom Scorpio/Anuradha.
pub(super) fn reference_couple() -> Couple {
    couple(
        ZodiacSign::Cancer,
        Nakshatra::Rohini,
        ZodiacSign::Scorpio,
        Nakshatra::Anuradha,
    )
}

pub(super) fn reference_request() -> CompatibilityRequest {
    CompatibilityRequest::new(
        PersonInput::new("Cancer", "Rohini"),
        PersonInput::new("Scorpio", "Anuradha"),
    )
}

pub(super) fn engine() -> AshtaKootaEngine {
    AshtaKootaEngine::new()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
