mod common;
use common::*;

#[test]
fn test_while() {
    let code = r#"
        #1=0
        o100 while [#1 lt 3]
            x#1
            #1=[#1+1]
        o100 endwhile
        m2
    "#;
    assert_eq!(run(code), "X0\nX1\nX2\nM2\n");
}

#[test]
fn test_while_false_skips_body() {
    let code = r#"
        #1=5
        o1 while [#1 lt 3]
            x#1
        o1 endwhile
        y1
    "#;
    assert_eq!(run(code), "Y1\n");
}

#[test]
fn test_do_while() {
    let code = r#"
        #1=5
        o1 do
            x#1
            #1=[#1+1]
        o1 while [#1 lt 3]
        y1
    "#;
    assert_eq!(run(code), "X5\nY1\n");
    let code = r#"
        #1=0
        o1 do
            x#1
            #1=[#1+1]
        o1 while [#1 lt 3]
    "#;
    assert_eq!(run(code), "X0\nX1\nX2\n");
}

#[test]
fn test_repeat() {
    let code = r#"
        #2=1.4
        o1 repeat [3]
            (msg,run)(debug,using param 2 = #2)x#2
            #2=[#2-0.3]
        o1 endrepeat
        m30
    "#;
    assert_eq!(
        run(code),
        "MSG: run\nDBG: using param 2 = 1.4\nX1.4\n\
         MSG: run\nDBG: using param 2 = 1.1\nX1.1\n\
         MSG: run\nDBG: using param 2 = 0.8\nX0.8\n\
         M30\n"
    );
}

#[test]
fn test_repeat_count_below_one() {
    assert_eq!(run("o1 repeat [0]\nx1\no1 endrepeat\ny2"), "X1\nY2\n");
    assert_eq!(run("o1 repeat [-3]\nx1\no1 endrepeat\ny2"), "X1\nY2\n");
    assert_eq!(
        run("o1 repeat [0-10**19]\nx1\no1 endrepeat\ny2"),
        "X1\nY2\n"
    );
    assert_eq!(run("o1 repeat [ln[0]]\nx1\no1 endrepeat\ny2"), "X1\nY2\n");
}

#[test]
fn test_if_elseif_else() {
    let code = |value: &str| {
        format!(
            r#"
            #1={}
            o1 if [#1 eq 0]
                x0
            o1 elseif [#1 eq 1]
                x1
            o1 elseif [#1 eq 1]
                x11
            o1 else
                x2
            o1 endif
            y9
        "#,
            value
        )
    };
    assert_eq!(run(&code("0")), "X0\nY9\n");
    assert_eq!(run(&code("1")), "X1\nY9\n");
    assert_eq!(run(&code("5")), "X2\nY9\n");
}

#[test]
fn test_break_continue() {
    let code = r#"
        #1=0
        o1 while [1]
            #1=[#1+1]
            o2 if [#1 eq 2]
                o1 continue
            o2 endif
            o3 if [#1 gt 3]
                o1 break
            o3 endif
            x#1
        o1 endwhile
        y#1
    "#;
    assert_eq!(run(code), "X1\nX3\nY4\n");
}

#[test]
fn test_subroutine() {
    let code = r#"
        (msg,Testing subroutines)
        #1=11 #30=12
        o10 sub
            (print,sub1 [1]=#1, [2]=#2)
            y#1
            y#2
            y#30
            #31=31
            y#31
        o10 endsub [456]
        o10 call [1] [2]
        (debug,main [1]=#1, [30]=#30, [5000]=#5000)
        x#5000
        x#1
        x#31
    "#;
    assert_eq!(
        run(code),
        "MSG: Testing subroutines\n\
         PRN: sub1 [1]=1, [2]=2\n\
         Y1\nY2\nY12\nY31\n\
         DBG: main [1]=11, [30]=12, [5000]=456\n\
         X456\nX11\nX31\n"
    );
}

#[test]
fn test_early_return() {
    let code = r#"
        o20 sub
            o21 if [#1 gt 5]
                o20 return [#1*2]
            o21 endif
        o20 endsub [0]
        o20 call [6]
        x#5000
        o20 call [1]
        x#5000
    "#;
    assert_eq!(run(code), "X12\nX0\n");
}

#[test]
fn test_recursion() {
    let code = r#"
        o30 sub
            o31 if [#1 le 1]
                o30 return [1]
            o31 endif
            o30 call [#1-1]
            o30 return [#5000*#1]
        o30 endsub
        o30 call [5]
        x#5000
    "#;
    assert_eq!(run(code), "X120\n");
}

#[test]
fn test_nested_loops() {
    let code = r#"
        #1=0
        o1 repeat [2]
            #2=0
            o2 while [#2 lt 2]
                x#1 y#2
                #2=[#2+1]
            o2 endwhile
            #1=[#1+1]
        o1 endrepeat
    "#;
    assert_eq!(run(code), "X0 Y0\nX0 Y1\nX1 Y0\nX1 Y1\n");
}
