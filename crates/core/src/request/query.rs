use url::form_urlencoded;

use super::types::Request;

impl Request {
    /// Build a request from a raw `application/x-www-form-urlencoded` query
    /// string. A leading `?` is ignored and repeated keys keep the last value.
    pub fn from_query_string(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let query = form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self {
            query,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ParamValue;

    #[test]
    fn test_parse_query_string() {
        let req = Request::from_query_string("?dialog_action=1&title=Hello%20World");
        assert_eq!(req.query("dialog_action"), Some("1"));
        assert_eq!(req.query("title"), Some("Hello World"));
        assert!(req.params.is_empty());
    }

    #[test]
    fn test_repeated_key_last_wins() {
        let req = Request::from_query_string("json_action=0&json_action=1");
        assert_eq!(req.query("json_action"), Some("1"));
    }

    #[test]
    fn test_empty_query_string() {
        assert!(Request::from_query_string("").query.is_empty());
        assert!(Request::from_query_string("?").query.is_empty());
    }

    #[test]
    fn test_param_scalar_parsing() {
        assert_eq!(ParamValue::parse_scalar("true"), ParamValue::Bool(true));
        assert_eq!(ParamValue::parse_scalar("1"), ParamValue::Int(1));
        assert_eq!(ParamValue::parse_scalar("null"), ParamValue::Null);
        assert_eq!(
            ParamValue::parse_scalar("\"1\""),
            ParamValue::String("1".to_string())
        );
        assert_eq!(ParamValue::parse_scalar("0.5"), ParamValue::Float(0.5));
        assert_eq!(
            ParamValue::parse_scalar("[1]"),
            ParamValue::Other(serde_json::json!([1]))
        );
        assert_eq!(
            ParamValue::parse_scalar("edit"),
            ParamValue::String("edit".to_string())
        );
    }

    #[test]
    fn test_request_from_json_keeps_param_types() {
        let json = r#"{"query":{"json_action":"1"},"params":{"dialogAction":true,"jsonAction":"1","id":7}}"#;
        let req: Request = serde_json::from_str(json).unwrap();
        assert_eq!(req.query("json_action"), Some("1"));
        assert_eq!(req.param("dialogAction"), Some(&ParamValue::Bool(true)));
        assert_eq!(
            req.param("jsonAction"),
            Some(&ParamValue::String("1".to_string()))
        );
        assert_eq!(req.param("id"), Some(&ParamValue::Int(7)));
    }

    #[test]
    fn test_request_from_json_with_router_values() {
        let json = r#"{"params":{"dialogAction":true,"pass":["7"],"ratio":1.5,"named":{"a":1}}}"#;
        let req: Request = serde_json::from_str(json).unwrap();
        assert_eq!(req.param("dialogAction"), Some(&ParamValue::Bool(true)));
        assert_eq!(
            req.param("pass"),
            Some(&ParamValue::Other(serde_json::json!(["7"])))
        );
        assert_eq!(req.param("ratio"), Some(&ParamValue::Float(1.5)));
        assert_eq!(
            req.param("named"),
            Some(&ParamValue::Other(serde_json::json!({"a": 1})))
        );
    }

    #[test]
    fn test_request_from_partial_json() {
        let req: Request = serde_json::from_str(r#"{"params":{"dialogAction":null}}"#).unwrap();
        assert!(req.query.is_empty());
        assert_eq!(req.param("dialogAction"), Some(&ParamValue::Null));
    }
}
