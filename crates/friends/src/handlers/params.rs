//! Query-string conversion for the read endpoints.
//!
//! Every parameter travels as a string and is converted here before any
//! repository access; a failed conversion becomes a 400 naming the field.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::AppError;

/// Raw query parameters of the list endpoints, as received on the wire.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReadQuery {
    /// "true" or "false", default "true".
    pub seeded: Option<String>,
    /// "true" returns bare rows, "false" resolves relations. Default "true".
    pub flat: Option<String>,
    /// Free-text filter. Accepted but not applied yet.
    pub filter: Option<String>,
    /// Page number. Accepted but not applied yet. Default "0".
    pub page_nr: Option<String>,
    /// Page size. Accepted but not applied yet. Default "1000".
    pub page_size: Option<String>,
}

/// Raw query parameters of the single-item read endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    pub id: Option<String>,
    pub flat: Option<String>,
}

/// Converted read parameters handed to the repository.
///
/// `filter`, `page_nr` and `page_size` are carried but not applied, and
/// `seeded` is not used as a filter either; the conversion still runs so a
/// malformed value fails before any store access.
#[derive(Debug, Clone)]
pub struct ReadArgs {
    pub seeded: bool,
    pub flat: bool,
    pub filter: Option<String>,
    pub page_nr: i32,
    pub page_size: i32,
}

impl ReadQuery {
    pub fn parse(self) -> Result<ReadArgs, AppError> {
        let seeded = parse_bool(self.seeded.as_deref().unwrap_or("true"), "seeded")?;
        let flat = parse_bool(self.flat.as_deref().unwrap_or("true"), "flat")?;
        let page_nr = parse_int(self.page_nr.as_deref().unwrap_or("0"), "pageNr")?;
        let page_size = parse_int(self.page_size.as_deref().unwrap_or("1000"), "pageSize")?;
        let filter = self.filter.map(|f| f.trim().to_lowercase());

        Ok(ReadArgs {
            seeded,
            flat,
            filter,
            page_nr,
            page_size,
        })
    }
}

/// Case-insensitive boolean conversion, whitespace tolerated.
pub fn parse_bool(raw: &str, field: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(AppError::ParamFormat(field.to_string())),
    }
}

pub fn parse_int(raw: &str, field: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::ParamFormat(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_sent() {
        let args = ReadQuery::default().parse().unwrap();

        assert!(args.seeded);
        assert!(args.flat);
        assert_eq!(args.filter, None);
        assert_eq!(args.page_nr, 0);
        assert_eq!(args.page_size, 1000);
    }

    #[test]
    fn booleans_are_case_insensitive_and_trimmed() {
        assert!(parse_bool("True", "seeded").unwrap());
        assert!(parse_bool(" FALSE ", "flat").is_ok());
        assert!(!parse_bool("false", "flat").unwrap());
    }

    #[test]
    fn malformed_bool_names_the_field() {
        let err = parse_bool("notabool", "seeded").unwrap_err();
        assert_eq!(err.to_string(), "seeded format error");
    }

    #[test]
    fn malformed_int_names_the_field() {
        let query = ReadQuery {
            page_size: Some("abc".to_string()),
            ..ReadQuery::default()
        };
        let err = query.parse().unwrap_err();
        assert_eq!(err.to_string(), "pageSize format error");
    }

    #[test]
    fn filter_is_trimmed_and_lowercased() {
        let query = ReadQuery {
            filter: Some("  AdA LoveLace ".to_string()),
            ..ReadQuery::default()
        };
        let args = query.parse().unwrap();
        assert_eq!(args.filter.as_deref(), Some("ada lovelace"));
    }
}
