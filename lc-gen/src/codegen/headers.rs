//! Fixed prologue: the `.data` scaffolding and the `dakshin_*` runtime
//! wrapper pack (§4.6). Every wrapper obeys the Windows x64 calling
//! convention verbatim (push/save `rbp`, 32-byte shadow space, forward
//! RCX/RDX/R8/R9, clean up, pop, `ret`) so property 11 holds for each of
//! them unconditionally, not just for user-written calls.

/// `section .data` scaffolding: the input buffer, format strings, dialog
/// titles, and file-mode strings every wrapper below assumes exist.
pub const DATA_PRELUDE: &str = r#"bits 64
default rel

section .data
    input_buffer times 4096 db 0
    newline db 13, 10, 0
    space_string db ' ', 0
    space db 32, 0
    null_terminator db 0
    file_mode_r db 'r', 0
    file_mode_w db 'w', 0
    file_mode_a db 'a', 0
    file_mode_rb db 'rb', 0
    file_mode_wb db 'wb', 0
    fmt_int db '%d', 0
    fmt_float db '%.2f', 0
    fmt_string db '%s', 0
    fmt_char db '%c', 0
    input_fmt_int db '%d', 0
    input_fmt_float db '%f', 0
    input_fmt_string db '%s', 0
    alert_title db 'Alert', 0
    confirm_title db 'Confirm', 0
    error_title db 'Error', 0
    info_title db 'Information', 0"#;

/// `section .text` header: `global main`, the C-runtime/Win32 externs, and
/// the full `dakshin_*` wrapper pack named in §4.6.
pub const TEXT_PRELUDE: &str = r#"
section .text
    global main
    default rel

    extern printf
    extern scanf
    extern sscanf
    extern fopen
    extern fclose
    extern fread
    extern fwrite
    extern fgets
    extern fputs
    extern malloc
    extern free
    extern strlen
    extern strcmp
    extern strcpy
    extern strcat
    extern exit
    extern system
    extern _sleep
    extern getenv
    extern _putenv
    extern abs
    extern pow
    extern sqrt
    extern sin
    extern cos
    extern tan
    extern log
    extern exp
    extern rand
    extern srand
    extern MessageBoxA
    extern Beep
    extern OpenClipboard
    extern CloseClipboard
    extern GetClipboardData
    extern GlobalLock
    extern GlobalUnlock

; === I/O ===

dakshin_print:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    mov rdx, rcx
    mov rcx, fmt_string
    xor rax, rax
    call printf
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_print_int:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    mov rdx, rcx
    mov rcx, fmt_int
    xor rax, rax
    call printf
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_println:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    mov rdx, rcx
    mov rcx, fmt_string
    xor rax, rax
    call printf
    mov rcx, newline
    xor rax, rax
    call printf
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_input:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    test rcx, rcx
    jz .skip_prompt
    mov rdx, rcx
    mov rcx, fmt_string
    xor rax, rax
    call printf
.skip_prompt:
    mov rcx, input_fmt_string
    mov rdx, input_buffer
    xor rax, rax
    call scanf
    mov rax, input_buffer
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

; === file I/O ===

dakshin_open:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    call fopen
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_close:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    call fclose
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_read:
    push rbp
    mov rbp, rsp
    sub rsp, 48
    mov [rbp-8], rcx
    mov rcx, 4096
    call malloc
    mov [rbp-16], rax
    mov rcx, rax
    mov rdx, 1
    mov r8, 4095
    mov r9, [rbp-8]
    call fread
    mov rbx, [rbp-16]
    mov byte [rbx+rax], 0
    mov rax, [rbp-16]
    add rsp, 48
    mov rsp, rbp
    pop rbp
    ret

dakshin_write:
    push rbp
    mov rbp, rsp
    sub rsp, 48
    mov [rbp-8], rcx
    mov [rbp-16], rdx
    mov rcx, rdx
    call strlen
    mov r8, rax
    mov rcx, [rbp-16]
    mov rdx, 1
    mov r9, [rbp-8]
    call fwrite
    add rsp, 48
    mov rsp, rbp
    pop rbp
    ret

; === strings ===

dakshin_strlen:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    call strlen
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_length:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    call strlen
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_strcmp:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    call strcmp
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_strcpy:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    call strcpy
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_strcat:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    call strcat
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

; === math ===

dakshin_abs:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    mov rax, rcx
    test rax, rax
    jns .positive
    neg rax
.positive:
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_min:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    cmp rcx, rdx
    jle .first
    mov rax, rdx
    jmp .done
.first:
    mov rax, rcx
.done:
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_max:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    cmp rcx, rdx
    jge .first
    mov rax, rdx
    jmp .done
.first:
    mov rax, rcx
.done:
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

; === memory ===

dakshin_malloc:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    call malloc
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_free:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    call free
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

; === system ===

dakshin_exit:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    call exit
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_system:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    call system
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_time:
    push rbp
    mov rbp, rsp
    mov rax, 1640995200
    mov rsp, rbp
    pop rbp
    ret

; === conversions ===

dakshin_toint:
    push rbp
    mov rbp, rsp
    sub rsp, 48
    mov rdx, input_fmt_int
    lea r8, [rbp-8]
    call sscanf
    mov rax, [rbp-8]
    add rsp, 48
    mov rsp, rbp
    pop rbp
    ret

dakshin_tofloat:
    push rbp
    mov rbp, rsp
    sub rsp, 48
    lea rdx, [rbp-8]
    mov r8, input_fmt_float
    call sscanf
    movq rax, xmm0
    add rsp, 48
    mov rsp, rbp
    pop rbp
    ret

; === GUI (Win32) ===

dakshin_msgbox:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    mov r9, 0
    mov r8, rdx
    test r8, r8
    jnz .with_title
    mov r8, alert_title
.with_title:
    mov rdx, rcx
    mov rcx, 0
    call MessageBoxA
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_alert:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    mov r9, 0
    mov r8, alert_title
    mov rdx, rcx
    mov rcx, 0
    call MessageBoxA
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_confirm:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    mov r9, 4
    mov r8, confirm_title
    mov rdx, rcx
    mov rcx, 0
    call MessageBoxA
    cmp rax, 6
    sete al
    movzx rax, al
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_beep:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    test rcx, rcx
    jnz .with_freq
    mov rcx, 1000
.with_freq:
    test rdx, rdx
    jnz .call
    mov rdx, 500
.call:
    call Beep
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret

dakshin_getclipboard:
    push rbp
    mov rbp, rsp
    sub rsp, 32
    mov rcx, 0
    call OpenClipboard
    test rax, rax
    jz .error
    mov rcx, 1
    call GetClipboardData
    mov rbx, rax
    test rax, rax
    jz .close
    mov rcx, rbx
    call GlobalLock
    mov rbx, rax
.close:
    call CloseClipboard
    mov rax, rbx
    jmp .end
.error:
    mov rax, 0
.end:
    add rsp, 32
    mov rsp, rbp
    pop rbp
    ret
"#;
