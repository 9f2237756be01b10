use anyhow::{Context, bail};
use bingo_core::DEFAULT_CLUES;
use gloo::net::http::Request;
use web_sys::UrlSearchParams;

/// Query parameter that names the clue file.
const CLUES_PARAM: &str = "clues";

/// Clue file for the current page, from `?clues=` or the default.
pub(crate) fn clue_resource() -> String {
    let search = gloo::utils::window()
        .location()
        .search()
        .unwrap_or_default();
    resource_from_search(&search)
}

pub(crate) fn resource_from_search(search: &str) -> String {
    UrlSearchParams::new_with_str(search)
        .ok()
        .and_then(|params| params.get(CLUES_PARAM))
        .unwrap_or_else(|| DEFAULT_CLUES.to_string())
}

/// Downloads a clue file, a JSON array of strings.
pub(crate) async fn fetch_clues(url: &str) -> anyhow::Result<Vec<String>> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .with_context(|| format!("request for {url} failed"))?;

    if !response.ok() {
        bail!("{} answered {} {}", url, response.status(), response.status_text());
    }

    response
        .json::<Vec<String>>()
        .await
        .with_context(|| format!("{url} is not a list of clues"))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn clues_param_overrides_default() {
        assert_eq!(resource_from_search("?clues=office.json"), "office.json");
        assert_eq!(
            resource_from_search("?x=1&clues=https%3A%2F%2Fexample.org%2Fc.json"),
            "https://example.org/c.json"
        );
    }

    #[wasm_bindgen_test]
    fn missing_param_uses_film_tropes() {
        assert_eq!(resource_from_search(""), DEFAULT_CLUES);
        assert_eq!(resource_from_search("?other=1"), "film-tropes.json");
    }

    #[wasm_bindgen_test]
    async fn unreachable_clue_file_is_an_error() {
        let result = fetch_clues("/this/clue/file/does-not-exist.json").await;
        assert!(result.is_err());
    }
}
