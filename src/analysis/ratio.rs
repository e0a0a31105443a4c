use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 분모가 0이 될 수 있는 비율 지표의 값.
///
/// 분모가 유한한 양수가 아니거나 결과가 유한하지 않으면 `Undefined`가 된다.
/// JSON에서는 숫자 또는 `null`로 표현한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Defined(f64),
    Undefined,
}

impl Ratio {
    /// numerator / denominator 를 계산한다.
    pub fn of(numerator: f64, denominator: f64) -> Self {
        if !denominator.is_finite() || denominator <= 0.0 {
            return Ratio::Undefined;
        }
        let q = numerator / denominator;
        if q.is_finite() {
            Ratio::Defined(q)
        } else {
            Ratio::Undefined
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Ratio::Defined(v) => Some(v),
            Ratio::Undefined => None,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Ratio::Undefined)
    }
}

impl From<Option<f64>> for Ratio {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Ratio::Defined(v),
            _ => Ratio::Undefined,
        }
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Ratio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<f64>::deserialize(deserializer).map(Ratio::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_or_non_finite_denominator_is_undefined() {
        assert_eq!(Ratio::of(1.0, 0.0), Ratio::Undefined);
        assert_eq!(Ratio::of(1.0, f64::NAN), Ratio::Undefined);
        assert_eq!(Ratio::of(1.0, f64::INFINITY), Ratio::Undefined);
        assert_eq!(Ratio::of(-5.0, 2.0), Ratio::Defined(-2.5));
    }

    #[test]
    fn overflowing_quotient_is_undefined() {
        assert_eq!(Ratio::of(f64::MAX, 1e-300), Ratio::Undefined);
    }

    #[test]
    fn serializes_as_number_or_null() {
        assert_eq!(serde_json::to_string(&Ratio::Defined(0.5)).unwrap(), "0.5");
        assert_eq!(serde_json::to_string(&Ratio::Undefined).unwrap(), "null");
        let back: Ratio = serde_json::from_str("null").unwrap();
        assert!(back.is_undefined());
    }
}
