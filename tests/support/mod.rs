use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// A small acyclic graph: A -> B -> C with a pricier direct A -> C, plus an isolated Z
pub const ACYCLIC: &str = r#"<graph>
  <id>g0</id>
  <name>Sample</name>
  <nodes>
    <node><id>A</id><name>Alpha</name></node>
    <node><id>B</id><name>Beta</name></node>
    <node><id>C</id><name>Gamma</name></node>
    <node><id>Z</id><name>Zeta</name></node>
  </nodes>
  <edges>
    <node><id>e1</id><from>A</from><to>B</to><cost>1</cost></node>
    <node><id>e2</id><from>B</from><to>C</to><cost>1</cost></node>
    <node><id>e3</id><from>A</from><to>C</to><cost>5</cost></node>
  </edges>
</graph>"#;

/// A two-node cycle
#[allow(dead_code)]
pub const CYCLIC: &str = r#"<graph>
  <id>loop</id>
  <name>Loop</name>
  <nodes>
    <node><id>A</id><name>A</name></node>
    <node><id>B</id><name>B</name></node>
  </nodes>
  <edges>
    <edge><id>e1</id><from>A</from><to>B</to><cost>1</cost></edge>
    <edge><id>e2</id><from>B</from><to>A</to><cost>1</cost></edge>
  </edges>
</graph>"#;

/// Get a Command for pathgraph
#[allow(dead_code)]
pub fn pathgraph() -> Command {
    cargo_bin_cmd!("pathgraph")
}

/// Command running in `dir`, isolated from the user's config and environment
pub fn pathgraph_in(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("pathgraph");
    cmd.current_dir(dir)
        .env("PATHGRAPH_CONFIG_DIR", dir.join(".config"))
        .env_remove("PATHGRAPH_DB")
        .env_remove("PATHGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a graph document into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, xml: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, xml).unwrap();
    path
}

/// Load a document into the default store in `dir` and return the new id
#[allow(dead_code)]
pub fn load_graph(dir: &Path, xml: &str) -> String {
    let path = write_graph(dir, "graph.xml", xml);
    let output = pathgraph_in(dir)
        .arg("load")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success(), "load failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
