//! Interactive greeting client.
//!
//! Asks for a URL, an `Accept` value and an `Accept-Encoding` value (any of
//! them may be given as options instead), performs one exchange and prints
//! the decoded response.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use bare_http::config::load_or_default;
use bare_http::http::{Client, Endpoint, Response};
use bare_http::observability::init_logging;
use bare_http::payload;

const ENCODINGS: [&str; 3] = ["none", "gzip", "deflate"];

#[derive(Parser)]
#[command(name = "greet-client")]
#[command(about = "One-shot client for the greeting server", long_about = None)]
struct Cli {
    /// Target URL, e.g. http://127.0.0.1:6636/greet/2306216636?name=Ada
    #[arg(short, long)]
    url: Option<String>,

    /// Accept header value
    #[arg(short, long)]
    accept: Option<String>,

    /// Accept-Encoding header value ("none" for no encoding)
    #[arg(short, long)]
    encoding: Option<String>,

    /// Only accept none, gzip or deflate as the encoding answer
    #[arg(long)]
    strict_encoding: bool,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn prompt(input: &mut impl BufRead, question: &str) -> io::Result<String> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        ));
    }
    Ok(line.trim().to_string())
}

fn ask_encoding(input: &mut impl BufRead, strict: bool) -> io::Result<String> {
    loop {
        let answer = prompt(
            input,
            "Input Accept Encoding (write \"none\" if no special encoding can be accepted): ",
        )?;
        if !strict || ENCODINGS.contains(&answer.as_str()) {
            return Ok(answer);
        }
        println!("Encoding must be one of: {}", ENCODINGS.join(", "));
    }
}

fn print_response(response: &Response) {
    println!("Status Code: {}", response.status);
    if response.is_encoded() {
        println!("Encoded: {}", response.content_encoding);
    }

    let body = match payload::decoded_body(response) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "Showing body undecoded");
            response.data.clone()
        }
    };
    println!("Body: {}", String::from_utf8_lossy(&body).trim());

    if body.is_empty() {
        return;
    }
    match payload::parse_greeting(&response.content_type, &body) {
        Some(Ok(greeting)) => println!("Parsed: {}", greeting),
        Some(Err(e)) => tracing::warn!(error = %e, "Body is not a greeting"),
        None => {}
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;
    init_logging(&config.observability)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let url = match cli.url {
        Some(url) => url,
        None => prompt(&mut input, "Input URL: ")?,
    };
    let endpoint = Endpoint::parse(&url)?;

    let accept = match cli.accept {
        Some(accept) => accept,
        None => prompt(&mut input, "Input Content Type: ")?,
    };
    let encoding = match cli.encoding {
        Some(encoding) if !cli.strict_encoding || ENCODINGS.contains(&encoding.as_str()) => encoding,
        _ => ask_encoding(&mut input, cli.strict_encoding)?,
    };

    let client = Client::new(&config.client);
    let response = client.get(&endpoint, &accept, &encoding).await?;
    print_response(&response);

    Ok(())
}
