use std::fs::File;
use std::io::Write;
use std::net::Ipv4Addr;
use std::process;

extern crate clap;
use clap::{App, Arg};

use arp_codec::{ArpPacket, Operation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Generates Ethernet/IPv4 ARP replies with randomized addresses, writes
/// their wire encodings to a file for inspection, and round-trips each one
/// back through the decoder as a sanity check.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = App::new("arp-pktgen")
        .version("0.1.0")
        .about("Writes randomized ARP packets to a file")
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("OUTPUT_FILE")
                .help("File the encoded packets are written to")
                .takes_value(true)
                .default_value("arp-packet.bin"),
        )
        .arg(
            Arg::with_name("count")
                .short("c")
                .long("count")
                .value_name("COUNT")
                .help("Number of packets to generate")
                .takes_value(true)
                .default_value("1")
                .validator(|c| c.parse::<usize>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("RNG seed, for reproducible output")
                .takes_value(true)
                .validator(|s| s.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        );
    let matches = app.get_matches();

    let output = matches.value_of("output").unwrap();
    let count: usize = matches.value_of("count").unwrap().parse().unwrap();
    let mut rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse().unwrap()),
        None => StdRng::from_entropy(),
    };

    let mut file = match File::create(output) {
        Ok(file) => file,
        Err(err) => {
            error!("Unable to create {}: {}", output, err);
            process::exit(1);
        }
    };

    for _ in 0..count {
        let packet = random_reply(&mut rng);
        let wire = packet.encode();

        if let Err(err) = file.write_all(&wire) {
            error!("Unable to write to {}: {}", output, err);
            process::exit(1);
        }

        match ArpPacket::decode(&wire) {
            Ok(decoded) if decoded == packet => {}
            Ok(_) => {
                error!("Round trip produced a different packet: {:?}", packet);
                process::exit(1);
            }
            Err(err) => {
                error!("Failed to decode generated packet: {}", err);
                process::exit(1);
            }
        }
    }

    info!("Wrote {} packet(s) to {}", count, output);
}

fn random_reply(rng: &mut StdRng) -> ArpPacket {
    ArpPacket::ethernet_ipv4(
        Operation::REPLY,
        rng.gen(),
        Ipv4Addr::from(rng.gen::<[u8; 4]>()),
        rng.gen(),
        Ipv4Addr::from(rng.gen::<[u8; 4]>()),
    )
}
