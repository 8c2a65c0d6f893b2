//! Read `|`-delimited records from a file.
//!
//! Run with: cargo run --example read_from_file

fn main() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/sample_data.csv");

    let res = hastycsv::read_file(path, b'|', |i, fields| {
        println!(
            "line {}: make={}, model={}, year={}, mpg={}",
            i,
            fields.field(0),
            fields.field(1),
            fields.field(2).as_u32(),
            fields.field(3).as_f32(),
        );
        Ok(())
    });

    if let Err(e) = res {
        println!("Error parsing csv file: {}", e);
    }
}
