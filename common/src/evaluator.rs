//! 申請判定ルール
//!
//! 地点と利用目的から判定を返す純粋関数。外部I/Oなし、エラーなし。
//! 範囲外の座標もそのまま判定する。

use crate::types::{Coordinate, Decision, Purpose, Verdict};

pub const REASON_COMMERCIAL: &str = "Land suitable for commercial use";
pub const REASON_INDUSTRIAL: &str = "Environmental clearance needed";
pub const REASON_PROTECTED: &str = "Land is protected area";

/// 商業利用が認められる領域の下限（いずれも境界を含まない）
const COMMERCIAL_MIN_LATITUDE: f64 = 15.0;
const COMMERCIAL_MIN_LONGITUDE: f64 = 75.0;

/// 申請を判定する（上から順に最初に一致したルール）
pub fn evaluate(coordinate: Coordinate, purpose: Purpose) -> Decision {
    let (verdict, reason) = match purpose {
        Purpose::Commercial
            if coordinate.latitude > COMMERCIAL_MIN_LATITUDE
                && coordinate.longitude > COMMERCIAL_MIN_LONGITUDE =>
        {
            (Verdict::Approved, REASON_COMMERCIAL)
        }
        Purpose::Industrial => (Verdict::FurtherReviewRequired, REASON_INDUSTRIAL),
        _ => (Verdict::Rejected, REASON_PROTECTED),
    };

    Decision {
        verdict,
        reason: reason.to_string(),
        coordinate,
        purpose,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_commercial_inside_region() {
        let d = evaluate(Coordinate::new(20.0, 80.0), Purpose::Commercial);
        assert_eq!(d.verdict, Verdict::Approved);
        assert_eq!(d.reason, REASON_COMMERCIAL);
        assert_eq!(d.coordinate, Coordinate::new(20.0, 80.0));
        assert_eq!(d.purpose, Purpose::Commercial);
    }

    #[test]
    fn test_boundary_is_rejected() {
        let d = evaluate(Coordinate::new(15.0, 76.0), Purpose::Commercial);
        assert_eq!(d.verdict, Verdict::Rejected);

        let d = evaluate(Coordinate::new(16.0, 75.0), Purpose::Commercial);
        assert_eq!(d.verdict, Verdict::Rejected);
        assert_eq!(d.reason, REASON_PROTECTED);
    }

    #[test]
    fn test_protected_rejected() {
        let d = evaluate(Coordinate::new(10.0, 70.0), Purpose::Protected);
        assert_eq!(d.verdict, Verdict::Rejected);
        assert_eq!(d.reason, "Land is protected area");
    }

    #[test]
    fn test_out_of_range_is_still_evaluated() {
        let d = evaluate(Coordinate::new(120.0, 500.0), Purpose::Commercial);
        assert_eq!(d.verdict, Verdict::Approved);

        let d = evaluate(Coordinate::new(-999.0, -999.0), Purpose::Industrial);
        assert_eq!(d.verdict, Verdict::FurtherReviewRequired);
    }

    proptest! {
        #[test]
        fn prop_commercial_region_approved(lat in 15.0001f64..90.0, lon in 75.0001f64..180.0) {
            let d = evaluate(Coordinate::new(lat, lon), Purpose::Commercial);
            prop_assert_eq!(d.verdict, Verdict::Approved);
            prop_assert_eq!(d.reason.as_str(), REASON_COMMERCIAL);
        }

        #[test]
        fn prop_industrial_always_review(lat in -500.0f64..500.0, lon in -500.0f64..500.0) {
            let d = evaluate(Coordinate::new(lat, lon), Purpose::Industrial);
            prop_assert_eq!(d.verdict, Verdict::FurtherReviewRequired);
            prop_assert_eq!(d.reason.as_str(), REASON_INDUSTRIAL);
        }

        #[test]
        fn prop_protected_and_agricultural_rejected(
            lat in -90.0f64..90.0,
            lon in -180.0f64..180.0,
            agricultural in any::<bool>(),
        ) {
            let purpose = if agricultural { Purpose::Agricultural } else { Purpose::Protected };
            let d = evaluate(Coordinate::new(lat, lon), purpose);
            prop_assert_eq!(d.verdict, Verdict::Rejected);
            prop_assert_eq!(d.reason.as_str(), REASON_PROTECTED);
        }

        #[test]
        fn prop_commercial_outside_region_rejected(lat in -90.0f64..=15.0, lon in -180.0f64..180.0) {
            let d = evaluate(Coordinate::new(lat, lon), Purpose::Commercial);
            prop_assert_eq!(d.verdict, Verdict::Rejected);
        }
    }
}
