#[derive(Debug)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}
