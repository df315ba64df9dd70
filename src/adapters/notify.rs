use crate::domain::ports::{Notifier, NoticeKind};

/// Terminal notification surface: the CLI stand-in for the toast layer.
#[derive(Debug, Clone, Default)]
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Info => println!("ℹ️  {message}"),
            NoticeKind::Success => println!("✅ {message}"),
            NoticeKind::Error => eprintln!("❌ {message}"),
        }
    }
}
