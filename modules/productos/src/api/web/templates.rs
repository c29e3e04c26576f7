//! Embedded page templates

use minijinja::Environment;
use serde::Serialize;

pub const BASE: &str = "base.html";
pub const INDEX: &str = "index.html";
pub const PRODUCTOS: &str = "productos.html";

/// Template environment with every page compiled in
///
/// `.html` names are auto-escaped. Missing context keys render as empty,
/// so `productos.html` works without any context.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(BASE, include_str!("../../../templates/base.html"))?;
        env.add_template(INDEX, include_str!("../../../templates/index.html"))?;
        env.add_template(PRODUCTOS, include_str!("../../../templates/productos.html"))?;
        Ok(Self { env })
    }

    /// Render a template by name
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
