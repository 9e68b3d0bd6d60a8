use docfile::{Dataset, JsonStorage, MemoryStorage, Record, Storage};
use serde_json::json;

fn main() -> Result<(), docfile::Error> {
    let path = std::env::temp_dir().join("docfile_example_basic.json");
    let _ = std::fs::remove_file(&path);

    // one file-backed store, one in-memory store, both behind the trait
    let mut backends: Vec<Box<dyn Storage>> = vec![
        Box::new(JsonStorage::builder(&path).create_dirs(true).build()?),
        Box::new(MemoryStorage::new()),
    ];

    let mut key1 = Record::new();
    key1.insert("subkey1".into(), json!("value1"));
    key1.insert("subkey2".into(), json!("value2"));
    let mut key2 = Record::new();
    key2.insert("subkey1".into(), json!(123));
    key2.insert("subkey2".into(), json!(456));
    let mut data = Dataset::new();
    data.insert("key1".into(), key1);
    data.insert("key2".into(), key2);

    for backend in &mut backends {
        println!("before write: {:?}", backend.read()?);
        backend.write(&data)?;
        if let Some(back) = backend.read()? {
            println!("after write:  {}", serde_json::to_string_pretty(&back)?);
        }
        backend.close();
    }

    println!("on disk:\n{}", std::fs::read_to_string(&path)?);
    let _ = std::fs::remove_file(&path);
    Ok(())
}
