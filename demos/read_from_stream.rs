//! Read `|`-delimited records from an in-memory stream.
//!
//! Run with: cargo run --example read_from_stream

use hastycsv::Reader;

fn main() {
    let input = "Honda|Acura NSX|2017|18.1
Chevrolet|Corvette|2016|16.5
BMW|M3|2015|18.7
Audi|A3|2014|25.4";

    let mut reader = Reader::with_delimiter(b'|');

    let res = reader.read(input.as_bytes(), |i, fields| {
        println!(
            "line {}: make={}, model={}, year={}, mpg={}",
            i,
            fields.field(0),
            fields.field(1),
            fields.field(2).as_u32(),
            fields.field(3).as_f32(),
        );
        // To stop reading, return an error here.
        Ok(())
    });

    if let Err(e) = res {
        println!("Error parsing csv input: {}", e);
    }
}
