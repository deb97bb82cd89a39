use std::io::{self, Read};

use timecue::{
    Qualification, QualificationContext, Qualifier, ReplyError, ReplySink, Submission, VideoMetadata, recognize,
};

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match recognize(&config.title) {
        Ok(Some(found)) => println!("timestamp: raw '{}' -> offset '{}'", found.raw, found.offset),
        Ok(None) => println!("timestamp: none"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }

    let Some(url) = config.url else {
        return;
    };
    let Some(length_seconds) = config.video_length else {
        eprintln!("error: --video-length is required with --url");
        std::process::exit(2);
    };

    let ctx = QualificationContext {
        submission: Submission {
            title: config.title,
            url,
            subreddit: config.subreddit,
            user_is_banned: config.banned,
        },
        video: VideoMetadata { title: config.video_title, length_seconds },
        comment_karma: config.karma,
        reply_authors: Vec::new(),
    };

    let Qualification { commented, reason } = Qualifier::default().qualify(&ctx, &mut DryRunSink);
    println!("commented: {commented}");
    if !reason.is_empty() {
        println!("reason: {reason}");
    }
}

/// Prints the reply instead of posting it.
struct DryRunSink;

impl ReplySink for DryRunSink {
    fn reply(&mut self, body: &str) -> Result<(), ReplyError> {
        println!("--- reply (dry run) ---");
        print!("{body}");
        println!("-----------------------");
        Ok(())
    }
}

struct CliConfig {
    title: String,
    url: Option<String>,
    video_title: String,
    video_length: Option<u32>,
    subreddit: String,
    karma: i64,
    banned: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut title: Option<String> = None;
    let mut url: Option<String> = None;
    let mut video_title = String::new();
    let mut video_length: Option<u32> = None;
    let mut subreddit = "videos".to_string();
    let mut karma: i64 = 0;
    let mut banned = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("timecue {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--url" => {
                url = Some(args.next().ok_or_else(|| "error: --url expects a value".to_string())?);
            }
            "--video-title" => {
                video_title = args.next().ok_or_else(|| "error: --video-title expects a value".to_string())?;
            }
            "--video-length" => {
                let value = args.next().ok_or_else(|| "error: --video-length expects a value".to_string())?;
                video_length =
                    Some(value.parse().map_err(|_| format!("error: invalid --video-length '{value}'"))?);
            }
            "--subreddit" => {
                subreddit = args.next().ok_or_else(|| "error: --subreddit expects a value".to_string())?;
            }
            "--karma" => {
                let value = args.next().ok_or_else(|| "error: --karma expects a value".to_string())?;
                karma = value.parse().map_err(|_| format!("error: invalid --karma '{value}'"))?;
            }
            "--banned" => banned = true,
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if title.is_some() {
                        return Err("error: title provided multiple times".to_string());
                    }
                    title = Some(rest);
                }
                break;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if title.is_some() {
                    return Err("error: title provided multiple times".to_string());
                }
                title = Some(rest);
                break;
            }
        }
    }

    let title = match title {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if title.trim().is_empty() {
        return Err(format!("error: no title provided\n\n{}", help_text()));
    }

    Ok(CliConfig { title, url, video_title, video_length, subreddit, karma, banned })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.trim_end().to_string())
}

fn help_text() -> String {
    format!(
        "timecue {version}

Timestamp recognition and submission qualification, dry-run.

Usage:
  timecue [OPTIONS] [--] <title...>

Recognizes the first timestamp in the title. With --url, also runs the
candidate through the qualification pipeline and prints the reply it would
post.

Options:
  --url <url>              Candidate video link; enables qualification.
  --video-title <text>     Title of the linked video. Default: empty.
  --video-length <secs>    Duration of the linked video. Required with --url.
  --subreddit <name>       Subreddit the candidate was posted in. Default: videos.
  --karma <n>              Current comment karma of the account. Default: 0.
  --banned                 Treat the account as banned from the subreddit.
  -h, --help               Show this help message.
  -V, --version            Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing title.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
