use crate::graph::Node;

/// Keys usable in a radix heap: unsigned integers compared by their highest differing bit
pub trait RadixKey: Copy + Default + Ord {
    /// Number of bits of Self
    const NUM_BITS: usize;

    /// Index of the bucket a key falls into when `top` is the last key popped
    fn bucket_for(&self, top: &Self) -> usize;
}

macro_rules! radix_key_impl_uint {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                const NUM_BITS: usize = (std::mem::size_of::<$t>() * 8);

                #[inline]
                fn bucket_for(&self, top: &Self) -> usize {
                    Self::NUM_BITS - (self ^ top).leading_zeros() as usize
                }
            }
        )*
    };
}

radix_key_impl_uint!(u32, u64);

const NOT_IN_HEAP: u8 = u8::MAX;

/// Monotone min-heap over the nodes `0..n` of a graph. Keys pushed must never be smaller
/// than the last key popped, which holds for Dijkstra with non-negative weights.
///
/// Each node is contained at most once; [`IndexedRadixHeap::push_or_decrease`] moves a
/// node to a smaller key.
///
/// NUM_BUCKETS must be equal to K::NUM_BITS + 1
#[derive(Debug)]
pub struct IndexedRadixHeap<K: RadixKey, const NUM_BUCKETS: usize> {
    len: usize,
    top: K,
    buckets: [Vec<(K, Node)>; NUM_BUCKETS],
    /// (bucket, position) of every node, bucket is NOT_IN_HEAP if absent
    position: Vec<(u8, u32)>,
}

/// Heap for path lengths
pub type DistanceHeap = IndexedRadixHeap<u64, 65>;

impl<K: RadixKey, const NUM_BUCKETS: usize> IndexedRadixHeap<K, NUM_BUCKETS> {
    pub fn new(n: usize) -> Self {
        debug_assert_eq!(NUM_BUCKETS, K::NUM_BITS + 1);
        Self {
            len: 0,
            top: K::default(),
            buckets: array_init::array_init(|_| Vec::new()),
            position: vec![(NOT_IN_HEAP, 0); n],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements and allows keys to start from zero again
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            for (_, node) in bucket.drain(..) {
                self.position[node as usize].0 = NOT_IN_HEAP;
            }
        }
        self.len = 0;
        self.top = K::default();
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, node: Node) -> bool {
        self.position[node as usize].0 != NOT_IN_HEAP
    }

    /// Current key of `node` if it is contained
    pub fn key_of(&self, node: Node) -> Option<K> {
        let (bucket, pos) = self.position[node as usize];
        (bucket != NOT_IN_HEAP).then(|| self.buckets[bucket as usize][pos as usize].0)
    }

    fn insert(&mut self, key: K, node: Node) {
        debug_assert!(key >= self.top);
        let bucket = key.bucket_for(&self.top);
        self.buckets[bucket].push((key, node));
        self.position[node as usize] = (bucket as u8, (self.buckets[bucket].len() - 1) as u32);
        self.len += 1;
    }

    /// Inserts `node` or lowers its key. Returns *true* if the heap changed.
    pub fn push_or_decrease(&mut self, key: K, node: Node) -> bool {
        match self.key_of(node) {
            Some(old) if old <= key => false,
            Some(_) => {
                self.remove(node);
                self.insert(key, node);
                true
            }
            None => {
                self.insert(key, node);
                true
            }
        }
    }

    /// Removes `node` and returns its key
    pub fn remove(&mut self, node: Node) -> Option<K> {
        let (bucket, pos) = self.position[node as usize];
        if bucket == NOT_IN_HEAP {
            return None;
        }

        let (bucket, pos) = (bucket as usize, pos as usize);
        let (key, _) = self.buckets[bucket].swap_remove(pos);
        if let Some(&(_, moved)) = self.buckets[bucket].get(pos) {
            self.position[moved as usize].1 = pos as u32;
        }

        self.position[node as usize].0 = NOT_IN_HEAP;
        self.len -= 1;
        Some(key)
    }

    /// Redistributes the first non-empty bucket relative to its minimum
    fn refill_first_bucket(&mut self) {
        let index = match self.buckets.iter().position(|b| !b.is_empty()) {
            None | Some(0) => return,
            Some(index) => index,
        };

        let entries = std::mem::take(&mut self.buckets[index]);
        if let Some(min) = entries.iter().map(|&(k, _)| k).min() {
            self.top = min;
        }

        for (key, node) in entries {
            let bucket = key.bucket_for(&self.top);
            debug_assert!(bucket < index);
            self.buckets[bucket].push((key, node));
            self.position[node as usize] = (bucket as u8, (self.buckets[bucket].len() - 1) as u32);
        }
    }

    /// Pops an element with the smallest key
    pub fn pop(&mut self) -> Option<(K, Node)> {
        if self.buckets[0].is_empty() {
            self.refill_first_bucket();
        }

        let (key, node) = self.buckets[0].pop()?;
        self.top = key;
        self.position[node as usize].0 = NOT_IN_HEAP;
        self.len -= 1;
        Some((key, node))
    }
}
