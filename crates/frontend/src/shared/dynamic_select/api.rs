use contracts::enums::EntityKind;
use contracts::shared::{CreateOptionRequest, SelectOption};
use gloo_net::http::Request;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

const API_BASE: &str = "/api/options";

pub type OptionsFuture = Pin<Box<dyn Future<Output = Result<Vec<SelectOption>, String>>>>;
pub type CreatedFuture = Pin<Box<dyn Future<Output = Result<SelectOption, String>>>>;

/// Loads the full option list of a field
pub type OptionFetcher = Rc<dyn Fn() -> OptionsFuture>;
/// Creates an option from a typed name
pub type OptionCreator = Rc<dyn Fn(String) -> CreatedFuture>;

/// Получить список вариантов выбора
pub async fn list_options(kind: EntityKind) -> Result<Vec<SelectOption>, String> {
    let url = format!("{}/{}", API_BASE, kind.code());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<SelectOption>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Server-side search
pub async fn search_options(kind: EntityKind, term: &str) -> Result<Vec<SelectOption>, String> {
    let url = format!(
        "{}/{}?search={}",
        API_BASE,
        kind.code(),
        urlencoding::encode(term.trim())
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<SelectOption>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Создать новый вариант выбора
pub async fn create_option(kind: EntityKind, name: String) -> Result<SelectOption, String> {
    let url = format!("{}/{}", API_BASE, kind.code());
    let req = CreateOptionRequest { name };

    let response = Request::post(&url)
        .json(&req)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<SelectOption>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub fn fetcher_for(kind: EntityKind) -> OptionFetcher {
    Rc::new(move || Box::pin(list_options(kind)) as OptionsFuture)
}

pub fn creator_for(kind: EntityKind) -> OptionCreator {
    Rc::new(move |name: String| Box::pin(create_option(kind, name)) as CreatedFuture)
}
