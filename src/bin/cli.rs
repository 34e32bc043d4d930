use clap::{Parser, Subcommand};
use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use btc_wire::wire::constants::{GENESIS_BLOCK_HASH_MAINNET, MAX_PAYLOAD_SIZE, PROTOCOL_VERSION};
use btc_wire::wire::{
    CodecConfig, Cursor, Message, MessageFactory, Network, NetworkAddress, OsRandom, Services,
    VarIntPolicy,
};

#[derive(Parser)]
#[command(name = "btc-wire", about = "Build and inspect Bitcoin P2P message frames")]
struct Cli {
    #[arg(long, default_value_t = Network::Mainnet)]
    network: Network,

    /// Largest payload accepted when encoding or decoding.
    #[arg(long, default_value_t = MAX_PAYLOAD_SIZE)]
    max_payload: usize,

    /// Accept non-minimal var-int encodings.
    #[arg(long)]
    lenient_varint: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a framed message as hex.
    Encode {
        #[command(subcommand)]
        message: Outbound,
    },
    /// Decode every frame in a hex string.
    Decode { hex: String },
}

#[derive(Subcommand)]
enum Outbound {
    Verack,
    Getaddr,
    Mempool,
    Filterclear,
    Ping,
    Version {
        #[arg(long, default_value = "/btc-wire:0.1.0/")]
        user_agent: String,
        #[arg(long, default_value_t = 0)]
        start_height: i32,
    },
    Getheaders {
        /// Locator block hash in display (big-endian) order. Defaults to
        /// the mainnet genesis block.
        #[arg(long)]
        locator: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();

    let config = CodecConfig {
        network: cli.network,
        max_payload_size: cli.max_payload,
        varint_policy: if cli.lenient_varint {
            VarIntPolicy::Lenient
        } else {
            VarIntPolicy::Canonical
        },
    };
    let factory = MessageFactory::new(config, OsRandom);

    match cli.command {
        Commands::Encode { message } => encode(&factory, message)?,
        Commands::Decode { hex } => decode(&factory, &hex)?,
    }

    Ok(())
}

fn encode(factory: &MessageFactory<OsRandom>, outbound: Outbound) -> Result<(), Box<dyn Error>> {
    let message = match outbound {
        Outbound::Verack => factory.verack(),
        Outbound::Getaddr => factory.getaddr(),
        Outbound::Mempool => factory.mempool(),
        Outbound::Filterclear => factory.filterclear(),
        Outbound::Ping => factory.ping()?,
        Outbound::Version {
            user_agent,
            start_height,
        } => {
            let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

            factory.version(
                PROTOCOL_VERSION,
                Services::NONE,
                i64::try_from(timestamp)?,
                NetworkAddress::unspecified(),
                NetworkAddress::unspecified(),
                user_agent,
                start_height,
                Some(false),
            )?
        }
        Outbound::Getheaders { locator } => {
            let hash = match locator {
                Some(hex_hash) => parse_hash(&hex_hash)?,
                None => GENESIS_BLOCK_HASH_MAINNET,
            };
            factory.getheaders(PROTOCOL_VERSION, vec![hash], None)
        }
    };

    println!("{}", hex::encode(factory.encode(&message)?));

    Ok(())
}

fn decode(factory: &MessageFactory<OsRandom>, input: &str) -> Result<(), Box<dyn Error>> {
    let bytes = hex::decode(input.trim())?;
    let mut cursor = Cursor::new(&bytes);

    while !cursor.is_empty() {
        let message = factory.parse(&mut cursor)?;

        println!("{} on {}:", message.command(), factory.codec().network());
        println!("{:#?}", message);

        if let Message::Headers(headers) = &message {
            if let Some(last) = headers.last() {
                let mut hash = last.hash();
                hash.reverse(); // big-endian for display
                println!("Last header hash: {}", hex::encode(hash));
            }
        }
    }

    Ok(())
}

/// Parses a block hash given in display order into wire order.
fn parse_hash(hex_hash: &str) -> Result<[u8; 32], Box<dyn Error>> {
    let mut hash: [u8; 32] = hex::decode(hex_hash)?
        .try_into()
        .map_err(|_| "block hash must be 32 bytes")?;
    hash.reverse();
    Ok(hash)
}
