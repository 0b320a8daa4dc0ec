/// Well documented Java class: one class doc, two method docs, one field doc.
pub const DOCUMENTED_JAVA: &str = "\
package demo;

/**
 * Keeps a running total.
 */
public class Counter {
    /** Current value. */
    private int value;

    /**
     * Adds to the total.
     * @param n amount
     */
    public void add(int n) {
        value += n;
    }

    /** Returns the total. */
    public int get() {
        return value;
    }
}
";

/// Same shape with no comments at all.
pub const BARE_JAVA: &str = "\
package demo;

public class Counter {
    private int value;

    public void add(int n) {
        value += n;
    }

    public int get() {
        return value;
    }
}
";

/// Lines traced in the classifier documentation.
pub const MIXED_LINES: &str = "// header\n\nint x = 1;\n/** doc */\n* note\n*/\n";
