use std::io;

use tally_core::InMemoryStore;

mod menu;

fn main() -> io::Result<()> {
    let mut store = InMemoryStore::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut store, &mut stdin.lock(), &mut stdout.lock())
}
