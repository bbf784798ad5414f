#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
use std::collections::BTreeMap;

use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub cost: String,
}

/// Models advertised by the service. When the catalog endpoint is down the
/// client falls back to a single hardcoded entry rather than blocking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub models: BTreeMap<String, ModelInfo>,
    pub default: String,
}

impl ModelCatalog {
    pub fn fallback() -> ModelCatalog {
        let mut models = BTreeMap::new();
        models.insert(
            "gpt-5".to_string(),
            ModelInfo {
                name: "GPT-5 (Latest)".to_string(),
                cost: "High".to_string(),
            },
        );

        return ModelCatalog {
            models,
            default: "gpt-5".to_string(),
        };
    }

    pub fn contains(&self, model_id: &str) -> bool {
        return self.models.contains_key(model_id);
    }

    pub fn label(&self, model_id: &str) -> String {
        if let Some(info) = self.models.get(model_id) {
            return format!("{} ({} Cost)", info.name, info.cost);
        }

        return model_id.to_string();
    }

    pub fn listing(&self) -> Vec<String> {
        return self
            .models
            .iter()
            .map(|(model_id, info)| {
                let mut line = format!("- {model_id}: {} ({} Cost)", info.name, info.cost);
                if *model_id == self.default {
                    line += " [default]";
                }
                return line;
            })
            .collect::<Vec<String>>();
    }
}
