#![allow(dead_code)]

//! Shared fixtures for integration tests

use std::collections::HashMap;

use serde_json::{json, Map, Value};

/// Unwrap a `json!` object literal into a translation tree
pub fn tree(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

/// Pre-seeded catalogs for en-US, pt-BR and es-ES
pub fn fixture_translations() -> HashMap<String, Map<String, Value>> {
    let mut translations = HashMap::new();

    translations.insert(
        "en-us".to_string(),
        tree(json!({
            "entry": {
                "customer": "Customer",
                "firstname": "Firstname",
                "lastname": "Lastname"
            },
            "text": {
                "selectedRow": {
                    "zero": "No selected row",
                    "one": "1 selected row",
                    "other": "{{count}} selected rows"
                },
                "welcome": "Welcome, {}!",
                "presentation": "My name is {} and I have {} children."
            },
            "error": {
                "required": "This field is required",
                "length": "Length must be between {} and {}",
                "range": "Must be between {{min}} and {{max}}"
            },
            "warn": { "timeout": "Timeout" },
            "success": { "save": "Successfully saved" },
            "info": { "changelog": "Changelog" },
            "only_en": "English only",
            "numeric": 7
        })),
    );

    translations.insert(
        "pt-br".to_string(),
        tree(json!({
            "entry": {
                "customer": "Cliente",
                "firstname": "Nome",
                "lastname": "Sobrenome"
            },
            "text": {
                "selectedRow": {
                    "zero": "Nenhuma linha selecionada",
                    "one": "1 linha selecionada",
                    "other": "{{count}} linhas selecionadas"
                },
                "welcome": "Seja bem-vindo, {}!"
            },
            "error": {
                "required": "Este campo é obrigatório",
                "length": "O tamanho para este campo deve estar entre {} e {}",
                "range": "O valor para este campo deve estar entre {{min}} e {{max}}"
            },
            "warn": { "timeout": "Tempo expirado" },
            "success": { "save": "Salvo com sucesso" },
            "info": { "changelog": "Log de alterações" }
        })),
    );

    translations.insert(
        "es-es".to_string(),
        tree(json!({
            "entry": {
                "customer": "Cliente",
                "firstname": "Nombre",
                "lastname": "Apellido"
            },
            "error": {
                "required": "Este campo es obligatorio",
                "length": "El tamaño de este campo debe estar entre {} y {}"
            },
            "warn": { "timeout": "Tiempo transcurrido" },
            "success": { "save": "Se ha guardado correctamente" },
            "info": { "changelog": "Cambio de registro" }
        })),
    );

    translations
}
