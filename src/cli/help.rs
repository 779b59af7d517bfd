// cli/help.rs - help text and the wait-for-Enter prompt.
//
//   print_usage  → one-line reminder on stderr (no arguments given)
//   print_help   → full help on stdout (`h` / `?` directive)
//   wait_enter   → block until the user presses Enter (interactive preview)

use std::io::{self, Write};

use crate::cli::constants::PROGRAM_VERSION;
use crate::config::{ENV_DISPLAY_LEVEL, ENV_INVERT_POLICY, ENV_VIEWER};

/// Print brief usage to stderr.
pub fn print_usage(program: &str) {
    eprintln!("Usage : ");
    eprintln!("      {} [ [ -<commands> ] <filenames> ]+ ", program);
    eprintln!("      {} -h    for details ", program);
}

/// Print the full help text to stdout.
pub fn print_help(program: &str) {
    println!();
    println!("{} v{} - make a few simple image manipulations easy.", program, PROGRAM_VERSION);
    println!("    Mostly meant for turning dark images into light images with white");
    println!("    backgrounds to save ink when printing them. Best for dark mode apps");
    println!("    with text.");
    println!();
    println!("syntax: {} [ [ -<commands> ] <filenames> ]+", program);
    println!();
    println!("        filenames - space-separated and/or wildcarded filenames");
    println!("        commands  - comma-separated list (no embedded spaces) of commands");
    println!("                    to apply to the following files. (details below)");
    println!();
    println!("details:");
    println!("    commands:");
    println!("        i         - invert the image");
    println!("        tNNN      - threshold for low intensity.  'NNN' is a number from 0");
    println!("                    to 255. For example if 'NNN' were 32, then every");
    println!("                    channel value less than or equal to 32 is set to 0.");
    println!("        rNNN      - resize to NNN percent of the current size.  'NNN' is");
    println!("                    a positive integer; r50 halves, r200 doubles.");
    println!("        bHHHHHH   - background color.  'HHHHHH' is a triplet of hexadecimal");
    println!("                    pairs giving the RGB value of the background.  For");
    println!("                    example: b000000 is black and bFFFFFF is white.  Used");
    println!("                    when inverting (semi-)transparent images with the");
    println!("                    flatten policy.");
    println!("        v         - view the image as it is at this point");
    println!("        q         - stop here and leave this file unchanged");
    println!("        qq        - stop here and exit without touching any more files");
    println!("        h,?       - prints this text");
    println!();
    println!("    Each converted file is first renamed to <filename>.bak.");
    println!();
    println!("environment:");
    println!("    {:<28} - 0 (silent) to 4 (debug), default 2", ENV_DISPLAY_LEVEL);
    println!("    {:<28} - 'preserve-alpha' (default) or 'flatten'", ENV_INVERT_POLICY);
    println!("    {:<28} - command used by 'v' to show the image", ENV_VIEWER);
    println!();
    println!("examples:");
    println!();
    println!("    * To invert an image");
    println!("    {} -i image.png", program);
    println!();
    println!("    * To force dark colors to black:");
    println!("    {} -t32 image.png", program);
    println!();
    println!("    * To force light colors to white:");
    println!("    {} -i,t32,i image.png", program);
    println!();
    println!("    * To invert one image and force dark colors to black in another");
    println!("    {} -i image1.png -t32 image2.png", program);
    println!();
    println!("    * To preview a half-size inverted image without saving it");
    println!("    {} -r50,i,v,q image.png", program);
    println!();
    println!("    * To invert all images");
    println!("    {} -i *.png *.jpg", program);
    println!();
    println!("note:");
    println!("    Only 8-bit RGB and RGBA images are converted; others are skipped.");
    println!("    Files are saved back in the format they were read in.");
}

/// Print a prompt and wait for the user to press Enter.
pub fn wait_enter() {
    eprint!("Press enter to continue...\n");
    let _ = io::stderr().flush();
    // Read exactly one character so nothing beyond the keypress is consumed.
    unsafe { libc::getchar() };
}
