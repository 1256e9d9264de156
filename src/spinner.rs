//! Console progress indicator for in-flight API calls

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use log::debug;

const FRAMES: [&str; 10] = [
  "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"
];
const FRAME_INTERVAL: Duration = Duration::from_millis(90);

/// One spinner per API call: spawned when the request goes out,
/// stopped and joined before the caller proceeds.
pub struct Spinner
{   active: Arc<AtomicBool>
  , task: tokio::task::JoinHandle<()>
  , label: String
}

impl Spinner
{   /// Spawn the redraw task and return a handle to stop it
    pub fn start(label: String) -> Self
    {   debug!("Starting spinner: {}", label);
        let active = Arc::new(AtomicBool::new(true));

        let flag = active.clone();
        let text = label.clone();
        let task = tokio::spawn(async move {
          let mut i: usize = 0;
          while flag.load(Ordering::Relaxed)
          {   let frame = FRAMES[i % FRAMES.len()];
              let color = 31 + (i % 6);
              print!("\r\x1b[1;{}m{}\x1b[0m {}", color, frame, text);
              let _ = std::io::stdout().flush();
              tokio::time::sleep(FRAME_INTERVAL).await;
              i += 1;
          }
        });

        Spinner
        {   active
          , task
          , label
        }
    }

    /// Signal the redraw task to stop, wait for it to finish,
    /// then leave a green check mark on the line
    pub async fn stop(self)
    {   debug!("Stopping spinner: {}", self.label);
        self.active.store(false, Ordering::Relaxed);
        let _ = self.task.await;
        println!("\r\x1b[1;32m✔\x1b[0m {}", self.label);
    }
}
