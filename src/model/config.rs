use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level layout of a parameter file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ParameterFile {
    #[serde(default)]
    pub report_parameters: ReportParameters,
}

/// Item name -> environment name -> parameter set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportParameters(pub BTreeMap<String, BTreeMap<String, ReportParameterSet>>);

impl ReportParameters {
    pub fn lookup(&self, item_name: &str, environment: &str) -> Option<&ReportParameterSet> {
        self.0.get(item_name)?.get(environment)
    }

    pub fn insert(&mut self, item_name: &str, environment: &str, params: ReportParameterSet) {
        self.0
            .entry(item_name.to_string())
            .or_default()
            .insert(environment.to_string(), params);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportParameterSet {
    pub workspace_name: String,
    pub semantic_model_name: String,
}
