use serde::{Deserialize, Serialize};

/// A single-method interface reduced to what the adapter template needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDescription {
    pub name: String,
    pub method_name: String,
    pub params: Vec<Parameter>,
    pub results: Vec<Parameter>,
}

impl InterfaceDescription {
    /// Whether the wrapper body has to start with `return`
    pub fn has_return(&self) -> bool {
        !self.results.is_empty()
    }

    /// Interface name with its first letter lower-cased, used for the adapter type
    pub fn lower_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn adapter_name(&self) -> String {
        format!("{}Func", self.lower_name())
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One entry of a parameter or result list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Parameter {
    /// Empty for results
    pub name: String,
    /// Qualified type spelling, without the `...` of a variadic parameter
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub variadic: bool,
}

impl Parameter {
    pub fn named(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            variadic: false,
        }
    }

    pub fn result(ty: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            ty: ty.into(),
            variadic: false,
        }
    }

    pub fn variadic(mut self, variadic: bool) -> Self {
        self.variadic = variadic;
        self
    }

    /// The type as written in a signature: `...T` for variadic parameters
    pub fn spelling(&self) -> String {
        if self.variadic {
            format!("...{}", self.ty)
        } else {
            self.ty.clone()
        }
    }
}
