use packed_bools::{BitVector, BitVectorError};

fn main() {
    println!("=== Packed Bools Examples ===\n");

    // Example 1: Seat reservations
    if let Err(err) = example_reservations() {
        println!("  Reservations failed: {}", err);
    }

    // Example 2: Saving and restoring
    if let Err(err) = example_persistence() {
        println!("  Persistence failed: {}", err);
    }

    // Example 3: Memory comparison
    example_memory_savings();
}

fn example_reservations() -> Result<(), BitVectorError> {
    println!("Example 1: Seat reservations (one bit per seat)");

    let mut seats = BitVector::zeroed(12);
    seats.set(0, true)?;
    seats.set(5, true)?;
    seats.set(11, true)?;

    let taken: Vec<usize> = seats
        .iter()
        .enumerate()
        .filter_map(|(i, taken)| taken.then_some(i))
        .collect();

    println!("  Seats: {}", seats.len());
    println!("  Taken: {:?}", taken);

    if let Err(err) = seats.set(12, true) {
        println!("  Seat 12: {}", err);
    }
    println!();

    Ok(())
}

fn example_persistence() -> Result<(), BitVectorError> {
    println!("Example 2: Encoded buffer round trip");

    let flags = BitVector::from_bools(&[true, false, true, true, false]);
    let bytes = flags.as_bytes().to_vec();
    println!("  Encoded: {:02X?}", bytes);

    let restored = BitVector::try_from(bytes)?;
    println!("  Restored: {:?}", restored.to_bools());
    println!("  Equal: {}", restored == flags);

    match BitVector::try_from(vec![0x80u8]) {
        Ok(_) => println!("  Truncated prefix accepted?"),
        Err(err) => println!("  Truncated prefix: {}", err),
    }
    println!();

    Ok(())
}

fn example_memory_savings() {
    println!("Example 3: Memory savings comparison");

    let count = 10_000;
    let plain: Vec<bool> = (0..count).map(|i| i % 3 == 0).collect();
    let packed = BitVector::from_bools(&plain);

    let plain_bytes = plain.len() * std::mem::size_of::<bool>();
    let packed_bytes = packed.as_bytes().len();
    let savings = 100.0 * (1.0 - (packed_bytes as f64 / plain_bytes as f64));

    println!("  Storing {} booleans:", count);
    println!("  Vec<bool>: {} bytes", plain_bytes);
    println!("  Packed:    {} bytes", packed_bytes);
    println!("  Savings:   {:.1}%", savings);
}
