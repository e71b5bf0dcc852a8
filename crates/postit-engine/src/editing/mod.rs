/*!
 * # Note Editing
 *
 * Host-side model of a note being edited on the canvas.
 *
 * ## Lifecycle
 *
 * - **Preview**: every keystroke is parsed in the background and shown, while
 *   the blocks from before the edit are kept aside.
 * - **Commit**: the final text is parsed; once that result lands it becomes
 *   the committed text and the kept blocks are dropped.
 * - **Abort**: the kept blocks come back and late results are ignored.
 *
 * All parsing goes through one [`ParseScheduler`](crate::scheduling::ParseScheduler)
 * per note, so a fast typist never piles up parses.
 */

pub mod note;

pub use note::NoteEditor;
