// src/common/validate.rs

use rust_decimal::Decimal;
use validator::ValidationError;

/// 电话号码格式：可选的 + 前缀，其余为数字和常见分隔符，且至少 5 位数字。
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let rest = value.strip_prefix('+').unwrap_or(value);
    let digits = rest.chars().filter(char::is_ascii_digit).count();
    let allowed = rest
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'));

    if digits >= 5 && allowed {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone");
        err.message = Some("请输入有效的电话号码".into());
        Err(err)
    }
}

pub fn validate_floor_height(value: &Decimal) -> Result<(), ValidationError> {
    decimal_range(
        value,
        Decimal::new(1, 1),
        Decimal::new(100, 1),
        "floor_height",
        "层高必须在0.1-10.0米之间",
    )
}

pub fn validate_car_speed(value: &Decimal) -> Result<(), ValidationError> {
    decimal_range(
        value,
        Decimal::new(1, 1),
        Decimal::new(100, 1),
        "car_speed",
        "运行速度必须在0.1-10.0m/s之间",
    )
}

pub fn validate_quote_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        let mut err = ValidationError::new("quote_amount");
        err.message = Some("报价金额必须大于等于0".into());
        return Err(err);
    }
    Ok(())
}

fn decimal_range(
    value: &Decimal,
    min: Decimal,
    max: Decimal,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    if *value < min || *value > max {
        let mut err = ValidationError::new(code);
        err.message = Some(message.into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_common_shapes() {
        assert!(validate_phone("13800001111").is_ok());
        assert!(validate_phone("+86 138-0000-1111").is_ok());
        assert!(validate_phone("(021) 6888 8888").is_ok());
    }

    #[test]
    fn phone_rejects_garbage() {
        assert!(validate_phone("abc").is_err());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("138#00001111").is_err());
    }

    #[test]
    fn floor_height_bounds() {
        assert!(validate_floor_height(&Decimal::new(1, 1)).is_ok()); // 0.1
        assert!(validate_floor_height(&Decimal::new(100, 1)).is_ok()); // 10.0
        assert!(validate_floor_height(&Decimal::new(5, 2)).is_err()); // 0.05
        assert!(validate_floor_height(&Decimal::new(101, 1)).is_err()); // 10.1
    }

    #[test]
    fn quote_amount_rejects_negative() {
        assert!(validate_quote_amount(&Decimal::ZERO).is_ok());
        assert!(validate_quote_amount(&Decimal::new(-1, 0)).is_err());
    }
}
