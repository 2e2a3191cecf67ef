//! Integration tests for minidfs

use bytes::Bytes;
use minidfs::{Config, Dfs, Error, File, MemoryNode, Result, StorageNode};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// A memory node whose map stays reachable from the test after it is handed to `Dfs`
#[derive(Clone)]
struct SharedNode {
    id: String,
    inner: Arc<Mutex<MemoryNode>>,
}

impl SharedNode {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            inner: Arc::new(Mutex::new(MemoryNode::new(id))),
        }
    }

    fn content(&self, name: &str) -> Option<Bytes> {
        self.inner
            .lock()
            .unwrap()
            .get(name)
            .unwrap()
            .map(|f| f.data().clone())
    }
}

impl StorageNode for SharedNode {
    fn id(&self) -> &str {
        &self.id
    }
    fn get(&self, name: &str) -> Result<Option<File>> {
        self.inner.lock().unwrap().get(name)
    }
    fn set(&mut self, name: &str, file: File) -> Result<()> {
        self.inner.lock().unwrap().set(name, file)
    }
    fn remove(&mut self, name: &str) -> Result<()> {
        self.inner.lock().unwrap().remove(name)
    }
    fn keys(&self) -> Result<Vec<String>> {
        self.inner.lock().unwrap().keys()
    }
}

fn shared_dfs(replicas: usize) -> (Dfs, Vec<SharedNode>) {
    let handles: Vec<SharedNode> = (1..=replicas)
        .map(|i| SharedNode::new(&format!("Node{}", i)))
        .collect();
    let nodes = handles
        .iter()
        .cloned()
        .map(|n| Box::new(n) as Box<dyn StorageNode>)
        .collect();
    (Dfs::with_nodes(nodes).unwrap(), handles)
}

fn holders(dfs: &Dfs, name: &str) -> Vec<String> {
    dfs.list()
        .unwrap()
        .into_iter()
        .filter(|l| l.contains(name))
        .map(|l| l.node_id)
        .collect()
}

#[test]
fn test_example_scenario() {
    let dfs = Dfs::new(3).unwrap();

    dfs.write("a.txt", "hello").unwrap();
    dfs.write("b.txt", "world").unwrap();
    assert_eq!(dfs.read("a.txt").unwrap(), Bytes::from("hello"));

    dfs.delete("a.txt").unwrap();
    assert!(matches!(dfs.read("a.txt"), Err(Error::NotFound(_))));

    let listings = dfs.list().unwrap();
    assert_eq!(listings.len(), 3);
    for listing in &listings {
        assert!(listing.contains("b.txt"));
        assert!(!listing.contains("a.txt"));
    }
}

#[test]
fn test_full_replication() {
    let dfs = Dfs::new(5).unwrap();
    dfs.write("doc.md", "# title").unwrap();

    assert_eq!(holders(&dfs, "doc.md"), dfs.node_ids());
}

#[test]
fn test_overwrite_leaves_no_stale_copy() {
    let dfs = Dfs::new(3).unwrap();
    dfs.write("f", "v1").unwrap();
    dfs.write("f", "v2").unwrap();

    assert_eq!(dfs.read("f").unwrap(), Bytes::from("v2"));
    for listing in dfs.list().unwrap() {
        assert_eq!(listing.files, vec!["f"]);
    }
}

#[test]
fn test_every_replica_holds_written_content() {
    let (dfs, replicas) = shared_dfs(4);
    dfs.write("doc.md", "# title").unwrap();

    for node in &replicas {
        assert_eq!(node.content("doc.md"), Some(Bytes::from("# title")), "{}", node.id);
    }
}

#[test]
fn test_overwrite_replaces_content_on_every_replica() {
    let (dfs, replicas) = shared_dfs(3);
    dfs.write("f", "v1").unwrap();
    dfs.write("f", "v2").unwrap();

    for node in &replicas {
        assert_eq!(node.content("f"), Some(Bytes::from("v2")), "{}", node.id);
        let file = node.get("f").unwrap().unwrap();
        assert_eq!(file.checksum(), minidfs::common::blake3_hash(b"v2"));
    }
}

#[test]
fn test_write_repairs_divergent_replica_content() {
    let (dfs, replicas) = shared_dfs(3);
    replicas[2]
        .inner
        .lock()
        .unwrap()
        .set("f", File::new("f", "stale"))
        .unwrap();

    dfs.write("f", "fresh").unwrap();
    for node in &replicas {
        assert_eq!(node.content("f"), Some(Bytes::from("fresh")), "{}", node.id);
    }

    dfs.delete("f").unwrap();
    for node in &replicas {
        assert_eq!(node.content("f"), None, "{}", node.id);
    }
}

#[test]
fn test_idempotent_delete() {
    let dfs = Dfs::new(3).unwrap();
    dfs.write("keep", "data").unwrap();
    let before = dfs.list().unwrap();

    dfs.delete("never-written").unwrap();
    dfs.delete("never-written").unwrap();

    assert_eq!(dfs.list().unwrap(), before);
}

#[test]
fn test_delete_removes_everywhere() {
    let dfs = Dfs::new(3).unwrap();
    dfs.write("gone", "soon").unwrap();
    dfs.delete("gone").unwrap();

    assert!(dfs.read("gone").unwrap_err().is_not_found());
    assert!(holders(&dfs, "gone").is_empty());
}

#[test]
fn test_binary_payload() {
    let dfs = Dfs::new(2).unwrap();
    let payload: Vec<u8> = (0..=255u8).collect();
    dfs.write("blob.bin", payload.clone()).unwrap();

    assert_eq!(dfs.read("blob.bin").unwrap().as_ref(), payload.as_slice());
}

#[test]
fn test_list_keeps_insertion_order() {
    let dfs = Dfs::new(2).unwrap();
    for name in ["c", "a", "b"] {
        dfs.write(name, name).unwrap();
    }

    for listing in dfs.list().unwrap() {
        assert_eq!(listing.files, vec!["c", "a", "b"]);
    }
}

#[test]
fn test_from_config_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[dfs]\nreplicas = 4\nnode_prefix = \"store\"").unwrap();

    let config = Config::load_from(file.path()).unwrap();
    let dfs = Dfs::from_config(&config.dfs).unwrap();

    assert_eq!(dfs.replicas(), 4);
    assert_eq!(dfs.node_ids()[3], "store4");
}
