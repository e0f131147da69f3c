use std::future::Future;

/// A single "nothing to show" element standing in for an empty or failed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub message: String,
    pub css_class: &'static str,
}

/// Generic filtered list: either items, or exactly one placeholder.
#[derive(Debug, Clone)]
pub struct ListView<R> {
    pub items: Vec<R>,
    pub placeholder: Option<Placeholder>,
}

impl<R> ListView<R> {
    pub fn from_items(items: Vec<R>, empty_message: &str) -> Self {
        let placeholder = items.is_empty().then(|| Placeholder {
            message: empty_message.to_string(),
            css_class: "no-records",
        });
        Self { items, placeholder }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            items: Vec::new(),
            placeholder: Some(Placeholder { message: message.to_string(), css_class: "error-message" }),
        }
    }
}

/// Run `fetch`, map every entity through `factory`, and fall back to `empty_message`.
pub async fn load<T, R, Fut>(fetch: Fut, factory: impl Fn(T) -> R, empty_message: &str) -> ListView<R>
where
    Fut: Future<Output = Vec<T>>,
{
    let items = fetch.await.into_iter().map(factory).collect();
    ListView::from_items(items, empty_message)
}
