use super::{Board, BoardRenderer};

impl Board {
    /// Print the board with a debugger banner, coloured with ANSI escapes.
    pub fn debug_print(&self) {
        println!("+=+=+-----Checkers Debugger-----+=+=+");
        print!("{}", BoardRenderer::ansi().render(self));
    }
}
