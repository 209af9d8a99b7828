use serde::de::DeserializeOwned;
use serde::Serialize;

/// Remote procedure implemented by the urlquery service.
///
/// Every procedure is invoked by POSTing a JSON object whose `method` field
/// names it; the remaining fields are the procedure's own parameters. The
/// associated `Response` is the shape of the JSON document the service
/// answers with. Procedures whose response the service leaves undocumented
/// declare [`serde_json::Value`] and pass the payload through verbatim.
pub trait ApiRequest
where
    Self: Serialize,
{
    type Response: DeserializeOwned;

    /// Value of the `method` field identifying this procedure.
    const METHOD: &'static str;
}

/// Cross-cutting directives attached to every request after the
/// procedure-specific fields: response compression and the API key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Directives<'a> {
    pub gzip: bool,
    pub key: Option<&'a str>,
}

/// The JSON document POSTed to the service: `method` first, then the
/// flattened procedure fields, then the [`Directives`] appended last.
#[derive(Debug, Serialize)]
pub struct Envelope<'a, Request> {
    pub method: &'static str,
    #[serde(flatten)]
    pub params: &'a Request,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gzip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'a str>,
}

impl<'a, Request> Envelope<'a, Request>
where
    Request: ApiRequest,
{
    pub fn new(params: &'a Request, directives: Directives<'a>) -> Self {
        Self {
            method: Request::METHOD,
            params,
            gzip: directives.gzip.then_some(true),
            key: directives.key,
        }
    }
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
