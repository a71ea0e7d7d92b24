use hashkey::{hash_str, Buckets, KeyError};

fn main() -> Result<(), KeyError> {
    // The bucket count is the next prime above the requested capacity
    let mut buckets = Buckets::with_min_capacity(12)?;
    let mut table: Vec<Vec<&str>> = vec![Vec::new(); buckets.count() as usize];

    let words = [
        "hello", "world", "ballynamoney", "lane", "pear tree", "frequent item",
        "less frequent item", "rare item",
    ];
    for word in words {
        table[buckets.index_str(word)?].push(word);
    }

    println!("{} buckets:", buckets.count());
    for (i, row) in table.iter().enumerate() {
        println!("{:>3}: {:?}", i, row);
    }

    // Stored keys stay valid after growing, only the reduction changes
    buckets = buckets.grow(2)?;
    println!("\nafter growing to {} buckets:", buckets.count());
    for word in words {
        let key = hash_str(word)?;
        println!("{:>20} key {:>20} bucket {:>3}", word, key, buckets.index(key));
    }

    Ok(())
}
