use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Десериализация числа, пришедшего либо числом, либо строкой ("12.50")
///
/// SQL NUMERIC часто сериализуется драйверами как строка. `null` читается как 0.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(NumberOrText::Number(n)) => Ok(n),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid number: {s:?}"))),
    }
}

/// `null` читается как значение по умолчанию (для отсутствующего поля нужен `#[serde(default)]`)
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Десятичная запись числа без незначащих нулей и знака `+`
///
/// `None`, если текст не является простой десятичной записью (экспонента, пробелы и т.п.).
fn canonical_decimal(text: &str) -> Option<String> {
    let (sign, digits) = match text.as_bytes().first()? {
        b'-' => ("-", &text[1..]),
        b'+' => ("", &text[1..]),
        _ => ("", text),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, f),
        None => (digits, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    };
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        Some(format!("{sign}{int_part}"))
    } else {
        Some(format!("{sign}{int_part}.{frac_part}"))
    }
}

/// Число, если оно в точности представляет введённый текст
fn exact_f64(text: &str) -> Option<f64> {
    let n = text.parse::<f64>().ok().filter(|n| n.is_finite())?;
    let canonical = canonical_decimal(text)?;
    (n.to_string() == canonical).then_some(n)
}

/// Числовое поле в том виде, в каком его ввёл пользователь
///
/// Сериализуется числом, если текст в точности записывает целое или десятичное
/// число, иначе отправляется строкой без изменений: проверку выполняет бэкенд.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawNumber(pub String);

impl RawNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for RawNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Ok(n) = self.0.parse::<i64>() {
            return serializer.serialize_i64(n);
        }
        match exact_f64(&self.0) {
            Some(n) => serializer.serialize_f64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}
