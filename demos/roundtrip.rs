use magnet_uri_rs::{decode, encode, DecoderOptions, EncoderOptions, MagnetLink};

fn main() {
    println!("=== Magnet URI <-> MagnetLink Round-Trip Examples ===\n");

    let inputs = [
        "magnet:?xt=urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a\
         &dn=Example%20File&tr=http%3A%2F%2Ftracker.example.com%2Fannounce",
        "magnet:?xt=urn:btih:a856772133117dd29d6e79695f4d087fa3dd3214\
         &dn=Depeche%20Mode%20%e2%80%93%20Playing%20The%20Angel\
         &tr=http%3a%2f%2fbt3.t-ru.org%2fann&tr=http%3a%2f%2fretracker.local%2fannounce",
        "magnet:?xs=A&xs=B&xs=A&kt=tag1+tag2&kt=tag3&x.pe=10.0.0.1%3A6881",
    ];

    for (i, input) in inputs.iter().enumerate() {
        println!("Example {}", i + 1);
        println!("==========");
        println!("Original URI:\n{}\n", input);

        let link = match decode(input, &DecoderOptions::default()) {
            Ok(link) => link,
            Err(e) => {
                println!("Error: {}\n", e);
                continue;
            }
        };

        let uri = encode(&link, &EncoderOptions::default());
        println!("Re-encoded URI:\n{}\n", uri);

        let reparsed = decode(&uri, &DecoderOptions::default()).map_err(|e| e.to_string());
        report(&link, reparsed);
    }
}

fn report(original: &MagnetLink, reparsed: Result<MagnetLink, String>) {
    match reparsed {
        Ok(link) if original.is_equivalent(&link) => println!("Round-trip successful!\n"),
        Ok(link) => println!("Round-trip changed the link: {:?}\n", link),
        Err(e) => println!("Re-encoded URI failed to parse: {}\n", e),
    }
}
