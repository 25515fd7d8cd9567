use crate::environment::Environment;

/// File types prettier handles without any extra plugin.
pub const FILE_TYPES: &[&str] = &[
  "mjs", "js", "ts", "json", "jsx", "tsx", "markdown", "md", "css", "scss", "sass", "gltf",
  // glsl shader types
  "fp", "frag", "frg", "fs", "fsh", "fshader", "geo", "geom", "glsl", "glslf", "glslv", "gs", "gshader", "rchit", "rmiss", "shader", "tesc", "tese", "vert",
  "vrx", "vsh", "vshader",
];

/// A file extension that becomes formattable when the plugin package
/// at `package_path` (relative to node_modules) is installed.
pub struct OptionalPlugin {
  pub extension: &'static str,
  pub package_path: &'static [&'static str],
}

impl OptionalPlugin {
  /// The module identifier prettier loads the plugin by.
  pub fn identifier(&self) -> String {
    self.package_path.join("/")
  }
}

const fn optional(extension: &'static str, package_path: &'static [&'static str]) -> OptionalPlugin {
  OptionalPlugin { extension, package_path }
}

const GLSL_PLUGIN: &[&str] = &["prettier-plugin-glsl"];

pub const OPTIONAL_PLUGINS: &[OptionalPlugin] = &[
  optional("haml", &["@prettier", "plugin-haml"]),
  optional("lua", &["@prettier", "plugin-lua"]),
  optional("php", &["@prettier", "plugin-php"]),
  optional("pug", &["@prettier", "plugin-pug"]),
  optional("py", &["@prettier", "plugin-python"]),
  optional("rb", &["@prettier", "plugin-ruby"]),
  optional("gemspec", &["@prettier", "plugin-ruby"]),
  optional("xml", &["@prettier", "plugin-xml"]),
  optional("toml", &["@voltiso", "prettier-plugin-toml"]),
  optional("java", &["prettier-plugin-java"]),
  optional("astro", &["prettier-plugin-astro"]),
  optional("svelte", &["prettier-plugin-svelte"]),
  optional("fp", GLSL_PLUGIN),
  optional("frag", GLSL_PLUGIN),
  optional("frg", GLSL_PLUGIN),
  optional("fs", GLSL_PLUGIN),
  optional("fsh", GLSL_PLUGIN),
  optional("fshader", GLSL_PLUGIN),
  optional("geo", GLSL_PLUGIN),
  optional("geom", GLSL_PLUGIN),
  optional("glsl", GLSL_PLUGIN),
  optional("glslf", GLSL_PLUGIN),
  optional("glslv", GLSL_PLUGIN),
  optional("gs", GLSL_PLUGIN),
  optional("gshader", GLSL_PLUGIN),
  optional("rchit", GLSL_PLUGIN),
  optional("rmiss", GLSL_PLUGIN),
  optional("shader", GLSL_PLUGIN),
  optional("tesc", GLSL_PLUGIN),
  optional("tese", GLSL_PLUGIN),
  optional("vert", GLSL_PLUGIN),
  optional("vrx", GLSL_PLUGIN),
  optional("vsh", GLSL_PLUGIN),
  optional("vshader", GLSL_PLUGIN),
];

/// Checks which optional plugin packages are installed. The returned
/// values line up with `OPTIONAL_PLUGINS` by index, so completion order
/// of the individual probes can never affect the result. A probe failure
/// counts as not installed.
pub async fn probe_optional_plugins<TEnvironment: Environment>(environment: &TEnvironment) -> anyhow::Result<Vec<bool>> {
  let node_modules_dir = environment.cwd()?.join("node_modules");
  let probes = OPTIONAL_PLUGINS.iter().map(|plugin| {
    let package_dir = plugin.package_path.iter().fold(node_modules_dir.clone(), |dir, part| dir.join(part));
    let environment = environment.clone();
    async move { environment.path_exists(&package_dir) }
  });
  Ok(futures::future::join_all(probes).await)
}
