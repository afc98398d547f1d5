//! Command line front end for the octet value types.

use std::error::Error;

use clap::{Parser, Subcommand};
use octet_int::{Char, UnsignedChar, Value};
use octet_types::{Bit, ByteUnit, Bytes, Immutable};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "octet", version, about = "Bit-level value types")]
struct Cli {
    /// Log filter, overrides `RUST_LOG`.
    #[clap(long, global = true)]
    log: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk through every value type.
    Demo,
    /// Render a single byte unit.
    Unit {
        #[clap(allow_hyphen_values = true)]
        value: i128,
    },
    /// Render a sequence of byte units.
    Bytes {
        #[clap(allow_hyphen_values = true)]
        values: Vec<i128>,
    },
    /// Add two single-byte integers with wraparound.
    Add {
        /// Treat the operands as signed characters.
        #[clap(long)]
        signed: bool,
        #[clap(allow_hyphen_values = true)]
        a: i64,
        #[clap(allow_hyphen_values = true)]
        b: i64,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let filter = match cli.log.as_deref() {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Command::Demo => demo(),
        Command::Unit { value } => {
            let unit: ByteUnit = ByteUnit::try_from_int(value)?;
            println!("{unit} {} {}", unit.to_int(), unit.to_mem());
            Ok(())
        }
        Command::Bytes { values } => {
            let bytes: Bytes = Bytes::try_from_iter(values)?;
            println!("{bytes}");
            println!("{}", bytes.to_mem());
            Ok(())
        }
        Command::Add { signed, a, b } => add(signed, a, b),
    }
}

fn add(signed: bool, a: i64, b: i64) -> Result<(), Box<dyn Error>> {
    let (sum, carry) = if signed {
        let (a, b) = (Char::try_new(a)?, Char::try_new(b)?);
        let (sum, carry) = a.overflowing_add(&b);
        (Value::from(sum), carry)
    } else {
        let (a, b) = (UnsignedChar::try_new(a)?, UnsignedChar::try_new(b)?);
        let (sum, carry) = a.overflowing_add(&b);
        (Value::from(sum), carry)
    };

    debug!(carry, "discarded carry");
    println!("{} = {} ({})", sum.to_int(), sum.to_mem(), sum);

    Ok(())
}

fn demo() -> Result<(), Box<dyn Error>> {
    println!("true = {}", Bit::TRUE);
    println!("false = {}", Bit::FALSE);
    println!();

    let a: ByteUnit =
        ByteUnit::try_from_bits([false, true, false, true, false, false, false, false])?;
    let b: ByteUnit = ByteUnit::try_from_int(80)?;
    println!("a = {a}");
    println!("b = {b}");
    println!("a == b: {}", a == b);
    println!("a.to_str() = {:?}", a.to_str());
    println!("b.to_mem() = {:?}", b.to_mem());
    println!("b.to_int() = {}", b.to_int());
    println!();

    let c: Bytes = Bytes::try_from_iter([80, 101, 116, 101, 114])?;
    let d: Bytes = Bytes::try_from_iter([80, 101, 116, 101, 114, 72, 117, 110, 116])?;
    println!("c = {c}");
    println!("d = {d}");
    println!("c.to_str() = {:?}", c.to_str());
    println!("d.to_mem() = {:?}", d.to_mem());
    println!("a in c: {}", c.contains(&a));
    println!("80 in d: {}", d.contains(&80u8));
    println!("c in d: {}", d.contains(&c));
    println!("Hunt in d: {}", d.contains(&Bytes::<Immutable>::from("Hunt")));
    println!("c.count(b) = {}", c.count(&b));
    println!("d.count(101) = {}", d.count(&101u8));
    println!();

    let e = Char::try_new(-48)?;
    println!("e = {e}");
    println!("e.to_str() = {:?}", e.to_str());
    println!("e.to_mem() = {:?}", e.to_mem());
    println!("e.to_int() = {}", e.to_int());
    println!();

    println!("null = {}", Bytes::<Immutable>::NULL);
    println!();

    let f = UnsignedChar::try_new(80)?;
    println!("f = {f}");
    println!("f.to_str() = {:?}", f.to_str());
    println!("f.to_mem() = {:?}", f.to_mem());
    println!("f.to_int() = {}", f.to_int());
    println!();

    match Value::from(e).try_add(&Value::from(f)) {
        Ok(sum) => println!("e + f = {sum}"),
        Err(err) => println!("e + f: {err}"),
    }

    Ok(())
}
